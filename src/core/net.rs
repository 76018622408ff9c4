// src/core/net.rs
//! Single-shot HTTP GET plus the politeness wrapper.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::FetchError;

/// One GET, no retry. `Ok(body)` means a 2xx answer with a readable body.
///
/// Callers treat `Err` as "skip this page and keep going"; it is never fatal.
pub trait Fetch {
    fn get(&mut self, url: &str) -> Result<String, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &mut F {
    fn get(&mut self, url: &str) -> Result<String, FetchError> {
        (**self).get(url)
    }
}

/// Blocking reqwest client with default headers.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&mut self, url: &str) -> Result<String, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: s!(url),
            source: Box::new(e),
        };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(transport)
    }
}

/// Sleeps a fixed pause between consecutive requests of the wrapped fetcher.
///
/// The first request goes out immediately; every later one waits `pause` first,
/// whether the previous request succeeded or not.
pub struct Polite<F> {
    inner: F,
    pause: Duration,
    sent: usize,
}

impl<F: Fetch> Polite<F> {
    pub fn new(inner: F, pause: Duration) -> Self {
        Self { inner, pause, sent: 0 }
    }

    /// Requests issued so far.
    pub fn sent(&self) -> usize { self.sent }
}

impl<F: Fetch> Fetch for Polite<F> {
    fn get(&mut self, url: &str) -> Result<String, FetchError> {
        if self.sent > 0 && !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        self.sent += 1;
        logd!(url, n = self.sent, "GET");
        self.inner.get(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    struct Echo;
    impl Fetch for Echo {
        fn get(&mut self, url: &str) -> Result<String, FetchError> { Ok(s!(url)) }
    }

    #[test]
    fn polite_pauses_between_requests_only() {
        let mut f = Polite::new(Echo, Duration::from_millis(20));

        let t = Instant::now();
        f.get("a").unwrap();
        assert!(t.elapsed() < Duration::from_millis(20));

        f.get("b").unwrap();
        f.get("c").unwrap();
        assert!(t.elapsed() >= Duration::from_millis(40));
        assert_eq!(f.sent(), 3);
    }

    #[test]
    fn polite_passes_errors_through() {
        struct Down;
        impl Fetch for Down {
            fn get(&mut self, url: &str) -> Result<String, FetchError> {
                Err(FetchError::Status { url: s!(url), status: 503 })
            }
        }
        let mut f = Polite::new(Down, Duration::ZERO);
        let err = f.get("https://x.test/").unwrap_err();
        assert_eq!(err.url(), "https://x.test/");
        assert_eq!(f.sent(), 1);
    }
}
