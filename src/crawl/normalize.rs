// src/crawl/normalize.rs
// =============================================================================
// Keeps the crawl on one site and gives every URL a single spelling.
//
// How it works:
// 1. The seed URL fixes the crawl's origin (scheme + host + port)
// 2. Each discovered link is either root-relative ("/docs") or absolute
// 3. Root-relative links are joined onto the origin, absolute ones parsed
// 4. Anything whose origin differs from the seed's is dropped
// 5. The survivor is rendered in canonical form, which is the key used by
//    both the frontier and the visited set
//
// Canonical form:
// - whatever the `url` crate produces (lower-case host, default port elided)
// - no #fragment ("/a#top" and "/a" are the same page)
// - a bare root path renders without its slash, so "http://example.com/"
//   and "http://example.com" are one page
//
// Known limitation: http and https on the same host are different origins,
// so a site that mixes them is only crawled on the seed's scheme.
// =============================================================================

use url::Url;

use crate::error::{CrawlError, Result};

// The origin a crawl is restricted to, derived from its seed URL
#[derive(Debug, Clone)]
pub struct Scope {
    root: Url,
    seed: String,
}

impl Scope {
    // Builds a scope from the seed URL
    //
    // Fails if the seed is not an absolute URL or has no host
    // (e.g. "example.com" without a scheme, or "file:///tmp").
    pub fn from_seed(seed: &str) -> Result<Self> {
        let parsed = Url::parse(seed.trim()).map_err(|source| CrawlError::InvalidSeed {
            url: seed.to_string(),
            source,
        })?;

        if parsed.host_str().is_none() {
            return Err(CrawlError::SeedWithoutHost(seed.to_string()));
        }

        // Joining "/" keeps scheme, host and port and drops everything else
        let root = parsed
            .join("/")
            .map_err(|source| CrawlError::InvalidSeed {
                url: seed.to_string(),
                source,
            })?;

        Ok(Self {
            root,
            seed: canonical(parsed),
        })
    }

    // The seed URL in canonical form - the first entry in the frontier
    pub fn seed(&self) -> &str {
        &self.seed
    }

    // The origin as "scheme://host[:port]"
    pub fn origin(&self) -> String {
        self.root.origin().ascii_serialization()
    }

    // Resolves a discovered link against the crawl origin
    //
    // Returns: Some(canonical_url) if the link stays on this site,
    //          None for anything else (other origin, mailto:, "#frag",
    //          "page.html", garbage)
    //
    // Examples (origin http://example.com):
    //   "/a"                    -> Some("http://example.com/a")
    //   "http://example.com/b"  -> Some("http://example.com/b")
    //   "http://other.com/c"    -> None
    //   "https://example.com/d" -> None (scheme differs)
    pub fn resolve(&self, candidate: &str) -> Option<String> {
        let candidate = candidate.trim();

        let url = if candidate.starts_with('/') {
            // Also covers protocol-relative "//host/path"; the origin
            // check below throws those out when the host differs
            self.root.join(candidate).ok()?
        } else {
            Url::parse(candidate).ok()?
        };

        if url.origin() != self.root.origin() {
            return None;
        }

        Some(canonical(url))
    }
}

// Resolves `candidate` against `base_origin` without building a Scope first
pub fn resolve(base_origin: &str, candidate: &str) -> Option<String> {
    Scope::from_seed(base_origin).ok()?.resolve(candidate)
}

fn canonical(mut url: Url) -> String {
    url.set_fragment(None);

    let rendered = url.to_string();
    if url.path() == "/" && url.query().is_none() {
        if let Some(stripped) = rendered.strip_suffix('/') {
            return stripped.to_string();
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> Scope {
        Scope::from_seed("http://example.com").unwrap()
    }

    #[test]
    fn test_seed_is_canonical() {
        assert_eq!(scope().seed(), "http://example.com");
        let with_slash = Scope::from_seed("http://EXAMPLE.com/").unwrap();
        assert_eq!(with_slash.seed(), "http://example.com");
        let deep = Scope::from_seed("http://example.com/docs/intro#start").unwrap();
        assert_eq!(deep.seed(), "http://example.com/docs/intro");
        assert_eq!(deep.origin(), "http://example.com");
    }

    #[test]
    fn test_invalid_seed() {
        assert!(matches!(
            Scope::from_seed("example.com"),
            Err(CrawlError::InvalidSeed { .. })
        ));
        assert!(matches!(
            Scope::from_seed("mailto:someone@example.com"),
            Err(CrawlError::SeedWithoutHost(_))
        ));
    }

    #[test]
    fn test_relative_and_absolute_links() {
        let scope = scope();
        assert_eq!(scope.resolve("/a"), Some("http://example.com/a".to_string()));
        assert_eq!(
            scope.resolve("http://example.com/b"),
            Some("http://example.com/b".to_string())
        );
        assert_eq!(scope.resolve("http://other.com/c"), None);
    }

    #[test]
    fn test_relative_and_absolute_agree() {
        let scope = scope();
        assert_eq!(
            scope.resolve("/docs/page?x=1"),
            scope.resolve("http://example.com/docs/page?x=1")
        );
        assert_eq!(scope.resolve("/"), scope.resolve("http://example.com"));
        assert_eq!(scope.resolve("/"), Some("http://example.com".to_string()));
    }

    #[test]
    fn test_fragment_dropped() {
        assert_eq!(
            scope().resolve("/a#section"),
            Some("http://example.com/a".to_string())
        );
    }

    #[test]
    fn test_out_of_scope_links() {
        let scope = scope();
        assert_eq!(scope.resolve("https://example.com/secure"), None);
        assert_eq!(scope.resolve("http://example.com:8080/other-port"), None);
        assert_eq!(scope.resolve("http://example.com.evil.org/x"), None);
        assert_eq!(scope.resolve("//other.com/x"), None);
        assert_eq!(scope.resolve("mailto:test@example.com"), None);
        assert_eq!(scope.resolve("javascript:void(0)"), None);
        assert_eq!(scope.resolve("#top"), None);
        assert_eq!(scope.resolve("page.html"), None);
    }

    #[test]
    fn test_malformed_links_are_filtered() {
        let scope = scope();
        assert_eq!(scope.resolve(""), None);
        assert_eq!(scope.resolve("http://[::1"), None);
        assert_eq!(scope.resolve("http://"), None);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let candidates = [
            "/",
            "/a",
            "/a/",
            "/a/../b",
            "/search?q=rust#results",
            "http://example.com",
            "http://EXAMPLE.com:80/c",
            "http://example.com/?page=2",
        ];
        for candidate in candidates {
            let once = resolve("http://example.com", candidate).unwrap();
            let twice = resolve("http://example.com", &once);
            assert_eq!(twice.as_deref(), Some(once.as_str()), "candidate {candidate}");
        }
    }
}
