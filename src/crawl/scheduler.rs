// src/crawl/scheduler.rs
// =============================================================================
// The crawl loop: pulls URLs off the frontier, claims them, and hands each
// one to a fetch task running on the worker pool.
//
// How it works:
// 1. The canonical seed URL goes into the frontier
// 2. The main loop waits on the frontier (pop_blocking with a timeout)
// 3. Each URL is claimed in the visited set; a lost claim means some
//    earlier pop already dispatched it, so it's skipped
// 4. A won claim bumps the in-flight counter and spawns a fetch task
// 5. The task fetches the page, extracts its links, pushes every in-scope
//    link back onto the frontier, and only then runs the page handler
// 6. When the frontier stays empty for a whole timeout AND no task is in
//    flight, nothing can ever add more work: the crawl is done
//
// States:
//   Running  -> pop returned a URL: claim, dispatch, loop
//   Draining -> pop timed out: check in-flight + frontier
//               still busy -> back to Running
//               quiet      -> Done
//   Done     -> return the visited set
//
// Failures stay local to their URL: a failed fetch, a non-200 answer or an
// extractor error just means that page contributes no links. A panicking
// task is logged when the loop reaps it.
// =============================================================================

use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};

use super::frontier::{Frontier, Popped};
use super::normalize::Scope;
use super::visited::VisitedSet;
use crate::config::CrawlConfig;
use crate::error::Result;
use crate::extract::{HtmlLinkExtractor, LinkExtractor};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::handler::{NoopHandler, PageHandler};

// Everything a fetch task needs. Cloning it only clones Arcs, and every
// clone points at the same frontier, visited set and counter.
#[derive(Clone)]
struct Shared {
    scope: Arc<Scope>,
    frontier: Arc<Frontier>,
    visited: Arc<VisitedSet>,
    in_flight: Arc<AtomicUsize>,
    workers: Arc<Semaphore>,
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn LinkExtractor>,
    handler: Arc<dyn PageHandler>,
}

// One crawl run. Build it, optionally swap in other collaborators, then
// call `run()`:
//
//   let pages = Crawler::new(CrawlConfig::new("https://example.com"))?
//       .with_handler(MyIndexer::default())
//       .run()
//       .await;
pub struct Crawler {
    shared: Shared,
    idle_timeout: Duration,
}

impl Crawler {
    // Validates the config and sets up a crawl with the default HTTP
    // fetcher, HTML link extractor and a no-op page handler
    pub fn new(config: CrawlConfig) -> Result<Self> {
        config.validate()?;

        let scope = Scope::from_seed(&config.seed)?;
        let fetcher = HttpFetcher::new(config.request_timeout)?;

        Ok(Self {
            shared: Shared {
                scope: Arc::new(scope),
                frontier: Arc::new(Frontier::new()),
                visited: Arc::new(VisitedSet::new()),
                in_flight: Arc::new(AtomicUsize::new(0)),
                workers: Arc::new(Semaphore::new(config.workers)),
                fetcher: Arc::new(fetcher),
                extractor: Arc::new(HtmlLinkExtractor::new()),
                handler: Arc::new(NoopHandler),
            },
            idle_timeout: config.idle_timeout,
        })
    }

    pub fn with_fetcher<F: Fetcher + 'static>(mut self, fetcher: F) -> Self {
        self.shared.fetcher = Arc::new(fetcher);
        self
    }

    pub fn with_extractor<E: LinkExtractor + 'static>(mut self, extractor: E) -> Self {
        self.shared.extractor = Arc::new(extractor);
        self
    }

    pub fn with_handler<H: PageHandler + 'static>(mut self, handler: H) -> Self {
        self.shared.handler = Arc::new(handler);
        self
    }

    pub fn scope(&self) -> &Scope {
        &self.shared.scope
    }

    // Crawls until quiescence
    //
    // Returns: every URL that was claimed for fetching, including the ones
    // whose fetch failed
    pub async fn run(self) -> HashSet<String> {
        let Crawler {
            shared,
            idle_timeout,
        } = self;

        info!(
            "Crawling {} ({} workers)",
            shared.scope.seed(),
            shared.workers.available_permits()
        );
        shared.frontier.push(shared.scope.seed().to_string());

        let mut tasks = JoinSet::new();

        loop {
            match shared.frontier.pop_blocking(idle_timeout).await {
                Popped::Url(url) => {
                    if !shared.visited.try_claim(&url) {
                        debug!("Already claimed: {}", url);
                        continue;
                    }

                    info!("Scraping: {}", url);
                    let in_flight = InFlightGuard::enter(&shared.in_flight);
                    tasks.spawn(shared.clone().process(url, in_flight));
                }
                Popped::TimedOut => {
                    // A task pushes its links before it drops its guard, so
                    // seeing zero here means every push has already landed
                    let in_flight = shared.in_flight.load(Ordering::SeqCst);
                    if in_flight == 0 && shared.frontier.is_empty() {
                        break;
                    }
                    debug!(
                        "Frontier idle with {} task(s) in flight, waiting again",
                        in_flight
                    );
                }
            }

            while let Some(joined) = tasks.try_join_next() {
                log_task_outcome(joined);
            }
        }

        // Counter is zero, so what's left here is tasks returning
        while let Some(joined) = tasks.join_next().await {
            log_task_outcome(joined);
        }

        info!("Task complete: {} page(s) visited", shared.visited.len());

        let visited = shared.visited;
        match Arc::try_unwrap(visited) {
            Ok(visited) => visited.into_set(),
            Err(still_shared) => still_shared.snapshot(),
        }
    }
}

impl Shared {
    // Body of one fetch task. Runs on the worker pool, never on the main
    // loop; holds one worker permit for the fetch and the link handling.
    async fn process(self, url: String, _in_flight: InFlightGuard) {
        let _permit = match self.workers.acquire().await {
            Ok(permit) => permit,
            Err(_) => {
                error!("Worker pool closed, dropping {}", url);
                return;
            }
        };

        let page = match self.fetcher.fetch(&url).await {
            Ok(page) if page.is_ok() => page,
            Ok(page) => {
                warn!("Not expanding {}: HTTP {}", url, page.status);
                return;
            }
            Err(e) => {
                warn!("{}", e);
                return;
            }
        };

        let links = match self.extractor.extract_links(&page.body) {
            Ok(links) => links,
            Err(e) => {
                warn!("{} on {}", e, url);
                Vec::new()
            }
        };

        let mut queued = 0;
        for link in &links {
            let Some(next) = self.scope.resolve(link) else {
                continue;
            };
            // Best effort only: two tasks can still both push the same new
            // URL. The claim in the main loop is what prevents a re-fetch.
            if self.visited.contains(&next) {
                continue;
            }
            self.frontier.push(next);
            queued += 1;
        }

        debug!("{}: {} link(s) found, {} queued", url, links.len(), queued);

        // Last, so a panicking handler can't cost the crawl this page's links
        self.handler.on_page_scraped(&url, &page.body);
    }
}

// Counts one task as in flight from dispatch until the task is dropped,
// whether it returned normally, panicked, or was aborted
struct InFlightGuard(Arc<AtomicUsize>);

impl InFlightGuard {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

fn log_task_outcome(joined: std::result::Result<(), JoinError>) {
    if let Err(e) = joined {
        error!("Crawl task failed: {}", e);
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why claim on pop instead of on push?
//    - Pushes come from many tasks at once; pops come from one loop
//    - try_claim is a single atomic insert, so whichever pop reaches a URL
//      first wins and every later copy of it in the queue is skipped
//    - Checking `contains` before a push only trims the queue; it is not
//      what keeps a page from being fetched twice
//
// 2. Why is a timeout alone not "done"?
//    - A slow fetch can take longer than the idle timeout; when it finishes
//      it may push a dozen new URLs. Only "no tasks AND empty queue" proves
//      nobody can push again
//
// 3. Why does the task acquire the permit and not the main loop?
//    - The main loop never waits on anything but the frontier. Dispatched
//      tasks queue up on the semaphore, and at most `workers` of them are
//      fetching at any moment
//
// 4. Why a Drop guard for the in-flight counter?
//    - A panic in a fetcher, extractor or page handler unwinds through the
//      task and drops the guard, so the counter can't get stuck above zero
//      and the crawl still terminates
// -----------------------------------------------------------------------------
