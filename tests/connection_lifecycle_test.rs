//! End-to-end tests for the device pool lifecycle: lazy connection, idle
//! reclamation by the background task, session resurrection, and shutdown.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use netllm::config::{Credentials, PoolConfig};
use netllm::transport::{DeviceSession, DeviceTransport, TransportError};
use netllm::DevicePool;

struct MockSession {
    id: usize,
    alive: Arc<AtomicBool>,
    disconnects: Arc<AtomicUsize>,
}

#[async_trait]
impl DeviceSession for MockSession {
    async fn is_alive(&mut self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    async fn send(&mut self, command: &str) -> Result<String, TransportError> {
        Ok(format!("session-{}: {}", self.id, command))
    }

    async fn disconnect(&mut self) -> Result<(), TransportError> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct MockTransport {
    connects: AtomicUsize,
    disconnects: Arc<AtomicUsize>,
}

impl MockTransport {
    fn new() -> Self {
        Self {
            connects: AtomicUsize::new(0),
            disconnects: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl DeviceTransport for MockTransport {
    async fn connect(
        &self,
        _host: &str,
        _credentials: &Credentials,
    ) -> Result<Box<dyn DeviceSession>, TransportError> {
        let id = self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            id,
            alive: Arc::new(AtomicBool::new(true)),
            disconnects: Arc::clone(&self.disconnects),
        }))
    }
}

fn fast_config() -> PoolConfig {
    PoolConfig::new(Credentials::new("admin", "secret", "cisco_ios"))
        .with_idle_timeout(Duration::from_millis(150))
        .with_scan_interval(Duration::from_millis(50))
}

#[tokio::test]
async fn idle_device_is_evicted_and_recreated_fresh() {
    let transport = Arc::new(MockTransport::new());
    let mut pool = DevicePool::new(
        "lifecycle",
        "Lifecycle test pool.",
        Arc::clone(&transport) as Arc<dyn DeviceTransport>,
        fast_config(),
    );
    pool.start();

    // First contact opens session 0 and leaves some history behind.
    let entry = pool.resolve("r1").await.unwrap();
    {
        let mut device = entry.lock().await;
        let output = device.send("show clock").await.unwrap();
        assert_eq!(output, "session-0: show clock");
        device.record_output("show clock", &output);
    }

    // Untouched well past the idle timeout: the reclamation task must
    // have dropped the record.
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(!pool.has_device("r1").await);
    assert_eq!(transport.disconnects.load(Ordering::SeqCst), 1);

    // The next resolve builds a brand new device: distinct session, empty
    // history.
    let entry = pool.resolve("r1").await.unwrap();
    {
        let mut device = entry.lock().await;
        let output = device.send("show clock").await.unwrap();
        assert_eq!(output, "session-1: show clock");
        assert!(device.output_history.is_empty());
    }

    pool.stop().await;
}

#[tokio::test]
async fn recently_used_device_survives_the_scan() {
    let transport = Arc::new(MockTransport::new());
    let mut pool = DevicePool::new(
        "lifecycle",
        "Lifecycle test pool.",
        Arc::clone(&transport) as Arc<dyn DeviceTransport>,
        fast_config(),
    );
    pool.start();

    for _ in 0..6 {
        pool.resolve("r1").await.unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
    }

    // Touched every 60ms against a 150ms timeout: never evicted.
    assert!(pool.has_device("r1").await);
    assert_eq!(transport.connects.load(Ordering::SeqCst), 1);

    pool.stop().await;
}

#[tokio::test]
async fn stop_closes_every_remaining_session() {
    let transport = Arc::new(MockTransport::new());
    let mut pool = DevicePool::new(
        "lifecycle",
        "Lifecycle test pool.",
        Arc::clone(&transport) as Arc<dyn DeviceTransport>,
        fast_config(),
    );
    pool.start();

    pool.resolve("r1").await.unwrap();
    pool.resolve("r2").await.unwrap();
    pool.resolve("r3").await.unwrap();
    pool.stop().await;

    assert_eq!(pool.device_count().await, 0);
    assert_eq!(transport.disconnects.load(Ordering::SeqCst), 3);
}
