use crate::{
    error::Error,
    model::page::{CharacterRow, Page},
};

/// Pagination state machine for a character list consumer.
///
/// The feed is a pure state container: `refresh` and `load_next` hand out a
/// [`FetchTicket`], the caller performs the fetch, and [`complete`] applies
/// the result. Each refresh bumps a generation counter and tickets from an
/// older generation are discarded on completion, so a late-arriving
/// response for a superseded request can never corrupt the accumulated
/// rows.
///
/// [`complete`]: CharacterFeed::complete
#[derive(Debug)]
pub struct CharacterFeed {
    rows: Vec<CharacterRow>,
    next_page: u32,
    total: Option<u64>,
    loading: bool,
    generation: u64,
}

/// Handle for one in-flight page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    page: u32,
    generation: u64,
    refresh: bool,
}

impl FetchTicket {
    /// Page number the holder should fetch.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// What [`CharacterFeed::complete`] did with a finished fetch.
#[derive(Debug)]
pub enum Outcome {
    /// The page was applied to the accumulated rows.
    Applied,
    /// The ticket belonged to a superseded generation; nothing changed.
    Stale,
    /// The fetch failed; the loading flag was cleared and rows left intact.
    Failed(Error),
}

impl Default for CharacterFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterFeed {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_page: 1,
            total: None,
            loading: false,
            generation: 0,
        }
    }

    /// Rows accumulated so far, in fetch order.
    pub fn rows(&self) -> &[CharacterRow] {
        &self.rows
    }

    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Upstream total-count hint from the most recent applied page.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Whether the accumulated rows cover the upstream total.
    pub fn is_exhausted(&self) -> bool {
        self.total
            .is_some_and(|total| self.rows.len() as u64 >= total)
    }

    /// Starts a refresh from page 1, superseding any fetch in flight.
    ///
    /// The accumulated rows are kept until the refreshed page arrives, so a
    /// failed refresh leaves the previous content on screen.
    pub fn refresh(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;

        FetchTicket {
            page: 1,
            generation: self.generation,
            refresh: true,
        }
    }

    /// Starts a fetch of the next page, unless one is already in flight.
    pub fn load_next(&mut self) -> Option<FetchTicket> {
        if self.loading {
            return None;
        }
        self.loading = true;

        Some(FetchTicket {
            page: self.next_page,
            generation: self.generation,
            refresh: false,
        })
    }

    /// Applies the result of the fetch identified by `ticket`.
    ///
    /// A ticket from a superseded generation is discarded without touching
    /// any state, including the loading flag of the fetch that superseded
    /// it. Success replaces the rows for a refresh ticket and appends
    /// otherwise; failure clears the loading flag and mutates nothing else.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Page<CharacterRow>, Error>,
    ) -> Outcome {
        if ticket.generation != self.generation {
            tracing::debug!(page = ticket.page, "discarding stale page completion");
            return Outcome::Stale;
        }

        self.loading = false;

        match result {
            Ok(page) => {
                if ticket.refresh {
                    self.rows.clear();
                }
                self.total = Some(page.count);
                self.rows.extend(page.items);
                self.next_page = ticket.page + 1;
                Outcome::Applied
            }
            Err(error) => Outcome::Failed(error),
        }
    }
}
