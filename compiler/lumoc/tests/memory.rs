//! Repeated evaluation must not retain memory between runs.
//!
//! Each `evaluate_text` call builds its own interner; once the call returns,
//! every string it interned should be freed again.

#![allow(unsafe_code, clippy::unwrap_used, clippy::cast_possible_wrap)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicIsize, Ordering};

use lumoc::commands::evaluate_text;

struct CountingAlloc;

static LIVE_BYTES: AtomicIsize = AtomicIsize::new(0);

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            LIVE_BYTES.fetch_add(layout.size() as isize, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        LIVE_BYTES.fetch_sub(layout.size() as isize, Ordering::SeqCst);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            LIVE_BYTES.fetch_add(new_size as isize - layout.size() as isize, Ordering::SeqCst);
        }
        new_ptr
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn program(i: usize) -> String {
    format!(r#"[["x{i}", "=>", ["+", "x{i}", 0]], 1]"#)
}

#[test]
fn test_repeated_evaluation_releases_identifiers() {
    // Warm up lazily-initialized statics before taking the baseline
    for i in 0..8 {
        assert_eq!(evaluate_text(&program(i)).unwrap().serialize(), "1.0");
    }
    let baseline = LIVE_BYTES.load(Ordering::SeqCst);

    for i in 0..1000 {
        let name = format!("unique_identifier_{i}");
        let text = format!(r#"[["{name}", "=>", "{name}"], 1]"#);
        assert_eq!(evaluate_text(&text).unwrap().serialize(), "1.0");
    }

    let retained = LIVE_BYTES.load(Ordering::SeqCst) - baseline;
    assert!(
        retained < 8192,
        "1000 evaluations retained {retained} bytes"
    );
}
