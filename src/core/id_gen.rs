use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
static GLOBAL_NONCE_COUNTER: AtomicU64 = AtomicU64::new(1);

pub fn gen_id() -> String {
    format!("el_{}", GLOBAL_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Fresh version nonce. An equality tag only, never an ordering.
pub fn gen_nonce() -> u64 {
    GLOBAL_NONCE_COUNTER.fetch_add(1, Ordering::SeqCst)
}
