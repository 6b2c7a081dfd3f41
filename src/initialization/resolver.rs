//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;

use crate::config::DNS_ATTEMPTS;

/// Initializes the DNS resolver used for every record check.
///
/// Uses the host system configuration (e.g. `/etc/resolv.conf`) when it can be
/// read, falling back to hickory's defaults otherwise. `ndots` is set to 0 so
/// search domains are never appended, and each question gets `timeout` per
/// attempt with a single attempt.
pub fn init_resolver(timeout: Duration) -> Arc<TokioResolver> {
    let mut builder = match TokioResolver::builder_tokio() {
        Ok(builder) => builder,
        Err(e) => {
            log::warn!("Failed to load system DNS configuration, falling back to defaults: {e}");
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
        }
    };

    let opts = builder.options_mut();
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;

    Arc::new(builder.build())
}
