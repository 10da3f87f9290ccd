// A poisoned lock means the registry contents can no longer be trusted, and untrustworthy
// leak diagnostics are worse than none (we panic).
pub(crate) const ERR_POISONED_LOCK: &str = "encountered poisoned lock - continued execution \
    is not safe because the tracked lifecycle state can no longer be trusted";
