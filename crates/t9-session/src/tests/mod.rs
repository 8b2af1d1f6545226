
use std::sync::Arc;

use t9_core::{build_index, T9Index};

use super::KeypadSession;

pub(super) fn make_test_index() -> Arc<T9Index> {
    let popular = [
        "the", "of", "good", "home", "gone", "hood", "hello", "moon", "noon", "mono", "monopoly",
    ];
    let general = ["Hellman", "Hellman's", "hoof", "goof", "in", "inch", "moon"];
    Arc::new(build_index(popular, general))
}

pub(super) fn new_session() -> KeypadSession {
    KeypadSession::new(make_test_index())
}
