#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_rdns_application::ports::{AddressSource, HostnameResolver, ReportRow, ReportWriter};
use ferrous_rdns_application::services::BlockingLookupPool;
use ferrous_rdns_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub enum MockResponse {
    Name(String),
    NoRecord,
    Error(DomainError),
    Hang,
    Panic,
}

/// Scripted resolver. Unscripted addresses answer with no record.
pub struct MockHostnameResolver {
    responses: Mutex<HashMap<IpAddr, MockResponse>>,
    delay: Duration,
    call_count: AtomicU64,
    calls: Mutex<Vec<IpAddr>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockHostnameResolver {
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            delay,
            call_count: AtomicU64::new(0),
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn set_response(&self, ip: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(ip.parse().unwrap(), response);
    }

    pub fn set_name(&self, ip: &str, hostname: &str) {
        self.set_response(ip, MockResponse::Name(hostname.to_string()));
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn calls_for(&self, ip: &str) -> usize {
        let ip: IpAddr = ip.parse().unwrap();
        self.calls.lock().unwrap().iter().filter(|c| **c == ip).count()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

struct InFlightGuard<'a>(&'a AtomicUsize);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl HostnameResolver for MockHostnameResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(ip);

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = InFlightGuard(&self.in_flight);
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let response = self.responses.lock().unwrap().get(&ip).cloned();
        match response {
            Some(MockResponse::Name(name)) => Ok(Some(name)),
            Some(MockResponse::NoRecord) | None => Ok(None),
            Some(MockResponse::Error(e)) => Err(e),
            Some(MockResponse::Hang) => {
                std::future::pending::<()>().await;
                Ok(None)
            }
            Some(MockResponse::Panic) => panic!("resolver blew up for {}", ip),
        }
    }
}

/// Resolver that blocks a thread per lookup, like the host resolver does.
pub struct BlockingMockResolver {
    pool: BlockingLookupPool,
    hold: Duration,
    running: Arc<AtomicUsize>,
    max_running: Arc<AtomicUsize>,
}

impl BlockingMockResolver {
    pub fn new(limit: usize, hold: Duration) -> Self {
        Self {
            pool: BlockingLookupPool::new(limit),
            hold,
            running: Arc::new(AtomicUsize::new(0)),
            max_running: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn max_running(&self) -> usize {
        self.max_running.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostnameResolver for BlockingMockResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        let hold = self.hold;
        let running = Arc::clone(&self.running);
        let max_running = Arc::clone(&self.max_running);

        self.pool
            .run(ip.to_string(), move || {
                let current = running.fetch_add(1, Ordering::SeqCst) + 1;
                max_running.fetch_max(current, Ordering::SeqCst);
                std::thread::sleep(hold);
                running.fetch_sub(1, Ordering::SeqCst);
                Ok(Some(format!("host-{}", ip)))
            })
            .await
    }
}

pub struct MockAddressSource {
    lines: Vec<String>,
    should_fail: bool,
}

impl MockAddressSource {
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            lines: Vec::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl AddressSource for MockAddressSource {
    async fn read_lines(&self) -> Result<Vec<String>, DomainError> {
        if self.should_fail {
            return Err(DomainError::InputUnreadable {
                path: "missing.txt".to_string(),
                reason: "No such file or directory".to_string(),
            });
        }
        Ok(self.lines.clone())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

pub struct MockReportWriter {
    written: Mutex<Vec<(PathBuf, Vec<ReportRow>)>>,
    should_fail: AtomicBool,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn written(&self) -> Vec<(PathBuf, Vec<ReportRow>)> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportWriter for MockReportWriter {
    async fn write_report(&self, path: &Path, rows: &[ReportRow]) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::OutputWrite {
                path: path.display().to_string(),
                reason: "Permission denied".to_string(),
            });
        }
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), rows.to_vec()));
        Ok(())
    }
}

pub fn targets(ips: &[&str]) -> Vec<(String, IpAddr)> {
    ips.iter()
        .map(|ip| (ip.to_string(), ip.parse().unwrap()))
        .collect()
}

pub fn row(hostname: &str, ip: &str) -> ReportRow {
    ReportRow {
        hostname: hostname.to_string(),
        ip: ip.to_string(),
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
