//! Host call surface for the appload payload locator.
//!
//! The embedding runtime drives the locator through a small, closed set of
//! operations ([`HostCall`]). This crate provides the typed router for that
//! surface: each operation maps to a statically-typed reply, and there is
//! deliberately no unknown-method fallback — an unparseable method name is
//! rejected before it reaches the router.
//!
//! The platform side (package manager queries, storage directory lookup) is
//! abstracted behind [`PlatformEnv`]; the host embedding implements it once
//! per platform and wires the router to its transport.
//!
//! # Example
//!
//! ```ignore
//! use appload_host::{CallRouter, HostCall, PlatformEnv};
//!
//! let router = CallRouter::new(env, "/data/user/0/com.example/code_cache/appload");
//! let reply = router.dispatch(HostCall::LibappPaths)?;
//! let json = reply.to_json()?;
//! ```

mod call;
mod env;
mod error;
mod router;

pub use call::HostCall;
pub use env::{AppInfo, PlatformEnv, StoragePaths};
pub use error::{HostError, HostResult};
pub use router::{CallReply, CallRouter};
