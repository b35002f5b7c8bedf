//! Device Connection Pool
//!
//! Maintains persistent sessions to network devices across multiple tool
//! calls. This lets the assistant hold connections to more than one host at
//! a time and avoid the overhead of repeatedly opening and closing sessions
//! to the same host. Sessions are monitored for inactivity and closed
//! automatically; to the assistant, connection lifecycle is invisible.
//!
//! A [`DevicePool`] is also a tool registry: tools registered through
//! [`DevicePool::register_host_tool`] take a `host` argument on the wire,
//! but receive a resolved [`ManagedDevice`] when they run.
//!
//! # Concurrency
//!
//! The host map is guarded by one async mutex, and every device record by
//! its own. `resolve` holds the map lock only to fetch or insert the entry,
//! then connects under the device lock; the reclamation scan `try_lock`s
//! each record, so a device mid-command is never torn down underneath its
//! caller. Callers hold the device lock for the duration of one command,
//! since line-oriented device shells are not safely multiplexed.

use std::collections::HashMap;
use std::error::Error;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{info, warn};
use serde_json::Value as JsonValue;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::netllm::config::PoolConfig;
use crate::netllm::tool_schema::ToolSpec;
use crate::netllm::toolbox::{RegisteredTool, ToolBox, ToolError, ToolFn};
use crate::netllm::transport::{DeviceSession, DeviceTransport, TransportError};

/// A managed session to one remote host plus its bookkeeping.
pub struct ManagedDevice {
    host: String,
    session: Option<Box<dyn DeviceSession>>,
    last_used: Instant,
    /// Last output per command, most-recent overwrite. Survives reconnects.
    pub output_history: HashMap<String, String>,
    /// Free-form notes tools may leave for each other. Survives reconnects.
    pub annotations: HashMap<String, String>,
    /// Set by the reclamation scan just before the record leaves the map.
    evicted: bool,
}

impl std::fmt::Debug for ManagedDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagedDevice")
            .field("host", &self.host)
            .field("session", &self.session.as_ref().map(|_| "..."))
            .field("last_used", &self.last_used)
            .field("output_history", &self.output_history)
            .field("annotations", &self.annotations)
            .field("evicted", &self.evicted)
            .finish()
    }
}

impl ManagedDevice {
    fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            session: None,
            last_used: Instant::now(),
            output_history: HashMap::new(),
            annotations: HashMap::new(),
            evicted: false,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Stamp the device as just used, resetting its idle clock.
    pub fn touch(&mut self) {
        self.last_used = Instant::now();
    }

    /// How long since the device was last used.
    pub fn idle_for(&self) -> Duration {
        self.last_used.elapsed()
    }

    /// Record the latest output of a command, replacing any prior entry.
    pub fn record_output(&mut self, command: &str, output: &str) {
        self.output_history
            .insert(command.to_string(), output.to_string());
    }

    /// Send one command over the live session.
    pub async fn send(&mut self, command: &str) -> Result<String, TransportError> {
        match self.session.as_mut() {
            Some(session) => session.send(command).await,
            None => Err(TransportError::Closed),
        }
    }
}

/// Type alias for functions that operate on a resolved device.
///
/// The pool holds the device's lock for the duration of the call, so the
/// function has exclusive use of the session.
pub type DeviceToolFn = Arc<
    dyn for<'a> Fn(
            &'a mut ManagedDevice,
            JsonValue,
        ) -> Pin<
            Box<
                dyn Future<Output = Result<Option<String>, Box<dyn Error + Send + Sync>>>
                    + Send
                    + 'a,
            >,
        > + Send
        + Sync,
>;

/// Shared handle to one device record. Lock it for the duration of one
/// command.
pub type DeviceEntry = Arc<Mutex<ManagedDevice>>;

struct PoolInner {
    devices: Mutex<HashMap<String, DeviceEntry>>,
    transport: Arc<dyn DeviceTransport>,
    config: PoolConfig,
    /// Set once `stop()` has drained the map; new resolves are refused so
    /// no session can be opened with nothing left to reclaim it.
    stopped: AtomicBool,
}

impl PoolInner {
    /// Return the live device record for `host`, connecting or reconnecting
    /// as needed. The only path out of a dead or absent session.
    async fn resolve(&self, host: &str) -> Result<DeviceEntry, TransportError> {
        loop {
            let entry = {
                let mut devices = self.devices.lock().await;
                if self.stopped.load(Ordering::SeqCst) {
                    return Err(TransportError::Closed);
                }
                devices
                    .entry(host.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(ManagedDevice::new(host))))
                    .clone()
            };

            let mut device = entry.lock().await;
            if device.evicted {
                // The scan removed this record while we waited for its
                // lock; start over with a fresh map entry.
                continue;
            }

            let alive = match device.session.as_mut() {
                Some(session) => session.is_alive().await,
                None => false,
            };
            if !alive {
                if device.session.is_some() {
                    info!("session to {} is stale, reconnecting", host);
                }
                let session = self
                    .transport
                    .connect(host, &self.config.credentials)
                    .await?;
                device.session = Some(session);
            }
            device.touch();
            drop(device);
            return Ok(entry);
        }
    }

    /// One reclamation pass: close and drop every record idle past the
    /// configured timeout. A record whose lock is held is in use and
    /// skipped until the next pass.
    async fn reclaim_idle(&self) {
        let mut devices = self.devices.lock().await;
        let mut expired = Vec::new();
        for (host, entry) in devices.iter() {
            let mut device = match entry.try_lock() {
                Ok(device) => device,
                Err(_) => continue,
            };
            if device.idle_for() <= self.config.idle_timeout {
                continue;
            }
            info!("closing connection to {} due to inactivity", host);
            device.evicted = true;
            if let Some(mut session) = device.session.take() {
                if let Err(err) = session.disconnect().await {
                    warn!("failed to close idle session to {}: {}", host, err);
                }
            }
            expired.push(host.clone());
        }
        for host in &expired {
            devices.remove(host);
        }
    }

    /// Refuse further resolves, close every remaining session, and empty
    /// the map. The flag flips under the map lock so a concurrent resolve
    /// either finished its insert (and is drained here) or errors out.
    async fn disconnect_all(&self) {
        let mut devices = self.devices.lock().await;
        self.stopped.store(true, Ordering::SeqCst);
        for (host, entry) in devices.drain() {
            let mut device = entry.lock().await;
            device.evicted = true;
            if let Some(mut session) = device.session.take() {
                if let Err(err) = session.disconnect().await {
                    warn!("failed to close session to {} on shutdown: {}", host, err);
                }
            }
        }
    }
}

/// A tool registry whose tools operate on pooled device sessions.
pub struct DevicePool {
    toolbox: ToolBox,
    inner: Arc<PoolInner>,
    shutdown: Option<watch::Sender<bool>>,
    reclaimer: Option<JoinHandle<()>>,
}

impl DevicePool {
    /// Create a pool with no registered tools and no open sessions.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        transport: Arc<dyn DeviceTransport>,
        config: PoolConfig,
    ) -> Self {
        Self {
            toolbox: ToolBox::new(name, description),
            inner: Arc::new(PoolInner {
                devices: Mutex::new(HashMap::new()),
                transport,
                config,
                stopped: AtomicBool::new(false),
            }),
            shutdown: None,
            reclaimer: None,
        }
    }

    /// Borrow the underlying toolbox.
    pub fn toolbox(&self) -> &ToolBox {
        &self.toolbox
    }

    /// Register a plain tool that does not touch any device.
    pub fn register(&mut self, spec: ToolSpec, function: ToolFn) -> &RegisteredTool {
        self.toolbox.register(spec, function)
    }

    /// Register a device-operating tool.
    ///
    /// On the wire the tool takes a `host` argument (declare it in the
    /// argument list); when invoked, the pool resolves the host to its managed
    /// device, locks it for the duration of the call, and hands the record
    /// to `function` in place of the raw host string.
    ///
    /// A connection failure is rendered as a readable string result rather
    /// than an error, since the tool-calling protocol expects a string
    /// even when the call cannot be serviced.
    pub fn register_host_tool(&mut self, spec: ToolSpec, function: DeviceToolFn) -> &RegisteredTool {
        let inner = Arc::clone(&self.inner);
        let tool_name = spec.name.clone();
        let wrapper: ToolFn = Arc::new(move |params: JsonValue| {
            let inner = Arc::clone(&inner);
            let function = Arc::clone(&function);
            let tool_name = tool_name.clone();
            Box::pin(async move {
                let host = match params.get("host").and_then(|v| v.as_str()) {
                    Some(host) => host.to_string(),
                    None => {
                        return Err(Box::new(ToolError::InvalidParameters(format!(
                            "{} requires a 'host' argument",
                            tool_name
                        )))
                            as Box<dyn Error + Send + Sync>)
                    }
                };
                let entry = match inner.resolve(&host).await {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!("{}: could not reach {}: {}", tool_name, host, err);
                        return Ok(Some(format!("Could not connect to {}: {}", host, err)));
                    }
                };
                let mut device = entry.lock().await;
                function(&mut *device, params).await
            })
        });
        self.toolbox.register(spec, wrapper)
    }

    /// Look up and execute a registered tool by name.
    pub async fn invoke(
        &self,
        name: &str,
        params: JsonValue,
    ) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        self.toolbox.invoke(name, params).await
    }

    /// Borrow a registered tool by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.toolbox.get(name)
    }

    /// Export one schema document per registered tool, in registration
    /// order.
    pub fn export_schema(&self) -> Vec<JsonValue> {
        self.toolbox.export_schema()
    }

    /// Return the live device record for `host`, connecting or
    /// reconnecting as needed. Callers lock the returned record for the
    /// duration of one command.
    pub async fn resolve(&self, host: &str) -> Result<DeviceEntry, TransportError> {
        self.inner.resolve(host).await
    }

    /// Whether a managed device currently exists for `host`.
    pub async fn has_device(&self, host: &str) -> bool {
        self.inner.devices.lock().await.contains_key(host)
    }

    /// Number of managed devices currently in the pool.
    pub async fn device_count(&self) -> usize {
        self.inner.devices.lock().await.len()
    }

    /// Launch the background reclamation task, clearing any prior stop
    /// signal. Does nothing if the task is already running.
    pub fn start(&mut self) {
        if self.reclaimer.is_some() {
            return;
        }
        self.inner.stopped.store(false, Ordering::SeqCst);
        let (tx, mut rx) = watch::channel(false);
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(inner.config.scan_interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => inner.reclaim_idle().await,
                    _ = rx.changed() => break,
                }
            }
        });
        self.shutdown = Some(tx);
        self.reclaimer = Some(handle);
    }

    /// Signal the reclamation task to exit, close every remaining session,
    /// and wait for the task to finish. Once stopped, `resolve` refuses to
    /// open new sessions until the pool is started again.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(true);
        }
        self.inner.disconnect_all().await;
        if let Some(handle) = self.reclaimer.take() {
            if let Err(err) = handle.await {
                warn!("reclamation task ended abnormally: {}", err);
            }
        }
    }
}
