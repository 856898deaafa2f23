// Host-side tests for mount bookkeeping: the teardown stack and the
// container registry.

use globe_core::mounts::MountRegistry;
use globe_core::teardown::Teardown;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<&'static str>>>;

fn recorder(log: &Log, name: &'static str) -> impl FnOnce() + 'static {
    let log = log.clone();
    move || log.borrow_mut().push(name)
}

#[test]
fn releases_run_newest_first() {
    let log = Log::default();
    let mut t = Teardown::new();
    t.push("style", recorder(&log, "style"));
    t.push("status", recorder(&log, "status"));
    t.push("canvas", recorder(&log, "canvas"));
    assert_eq!(t.len(), 3);
    t.run();
    assert_eq!(*log.borrow(), ["canvas", "status", "style"]);
    assert!(t.is_empty());
}

#[test]
fn run_is_idempotent_and_drop_does_not_repeat() {
    let log = Log::default();
    let mut t = Teardown::new();
    t.push("canvas", recorder(&log, "canvas"));
    t.run();
    t.run();
    drop(t);
    assert_eq!(*log.borrow(), ["canvas"]);
}

/// Shaped like a mount: acquire a few things, then fail before finishing.
fn mount_that_fails(log: &Log, fail_after: usize) -> Result<Teardown, &'static str> {
    let mut t = Teardown::new();
    for (i, name) in ["status", "canvas", "panel"].into_iter().enumerate() {
        if i == fail_after {
            return Err("wiring failed");
        }
        t.push(name, recorder(log, name));
    }
    Ok(t)
}

#[test]
fn failed_mount_removes_what_it_added() {
    let log = Log::default();
    assert!(mount_that_fails(&log, 2).is_err());
    assert_eq!(*log.borrow(), ["canvas", "status"]);
}

#[test]
fn successful_mount_keeps_everything_until_run() {
    let log = Log::default();
    let mut t = mount_that_fails(&log, usize::MAX).unwrap();
    assert!(log.borrow().is_empty());
    t.run();
    assert_eq!(*log.borrow(), ["panel", "canvas", "status"]);
}

#[test]
fn a_container_hosts_one_globe_at_a_time() {
    let mut mounts = MountRegistry::default();
    assert!(mounts.claim("globe-root"));
    assert!(!mounts.claim("globe-root"));
    assert!(mounts.claim("other"));
    assert_eq!(mounts.len(), 2);

    assert!(mounts.release("globe-root"));
    assert!(!mounts.release("globe-root"));
    assert!(!mounts.is_claimed("globe-root"));
    assert!(mounts.claim("globe-root"));
}

#[test]
fn released_claim_through_teardown() {
    let mounts = Rc::new(RefCell::new(MountRegistry::default()));
    let mut t = Teardown::new();
    assert!(mounts.borrow_mut().claim("globe-root"));
    let m = mounts.clone();
    t.push("mount claim", move || {
        m.borrow_mut().release("globe-root");
    });
    drop(t);
    assert!(mounts.borrow().is_empty());
}
