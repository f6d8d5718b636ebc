//! # routeprof - Per-Route Sampling Profiler Substrate
//!
//! routeprof extends a request-processing host with an opt-in, per-route
//! profiling facility. It is not a profiler itself: it is the scheduling
//! and configuration substrate a profiler plugs into. It decides, per
//! inbound request, whether profiling is active for that route, and
//! independently drives a recurring background sample on a configured
//! interval, provisioning the output directory at load time.
//!
//! ## Architecture Overview
//!
//! ```text
//!                 load phase (synchronous, before serving)
//! ┌──────────────────────────────────────────────────────────────┐
//! │  scope directives ──▶ pure merge ──▶ provisioning ──▶ plan   │
//! │   (config::loader)  (config::scope)   (provision)            │
//! └───────────────┬───────────────────────────────┬──────────────┘
//!                 ▼                               ▼
//!         ┌──────────────┐                ┌──────────────┐
//!         │ RequestGate  │                │ SampleTimer  │
//!         │  (per req)   │                │ (per process)│
//!         └──────┬───────┘                └──────┬───────┘
//!                │ Instrument / PassThrough      │ fire ▶ re-arm
//!                ▼                               ▼
//!          host pipeline                  Collector (external)
//! ```
//!
//! ## Module Structure
//!
//! - [`config`]: hierarchical scope configuration — declared records,
//!   the pure inheritance merge, and the load phase that resolves the
//!   tree parent-before-child and computes the process-global sampling
//!   plan
//! - [`provision`]: one-time output directory validation/creation
//!   (load-time only, fatal on failure)
//! - [`gate`]: the per-request predicate the host's dispatch hook calls;
//!   lookup-only over the resolved tree, total over all routes
//! - [`sampler`]: the recurring timer state machine, its reactor driver,
//!   and the injected collector capability
//! - [`cli`]: command-line argument parsing for the demonstration binary
//! - [`domain`]: core domain types and the error taxonomy
//!
//! ## Execution Model
//!
//! Everything shares the host's single-threaded reactor. The load phase
//! runs before any request is served and may block on the filesystem;
//! after load, the resolved configuration is immutable, the gate never
//! allocates or performs I/O, and the timer callback stays bounded so it
//! cannot starve request processing. Load-time errors are fatal for the
//! process; a failed sample fire is logged and the timer re-arms anyway.

pub mod cli;
pub mod config;
pub mod domain;
pub mod gate;
pub mod provision;
pub mod sampler;
