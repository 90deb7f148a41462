//! 生命周期操作的端到端属性测试

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use proptest::prelude::*;

use zones::{CallerContext, Pid, ProcessRoster, ProcessTable, ZoneError, ZoneId, ZoneManager};

fn root_caller() -> CallerContext {
    CallerContext::new(Pid::new(1), ZoneId::ROOT, true)
}

#[test]
fn concurrent_creates_never_collide() {
    let manager = Arc::new(ZoneManager::new(Arc::new(ProcessTable::new())));

    let mut handles = Vec::new();
    for t in 0..8 {
        let manager = manager.clone();
        handles.push(thread::spawn(move || {
            let ctx = root_caller();
            let mut ids = Vec::new();
            for i in 0..16 {
                let name = format!("zone-{}-{}", t, i);
                ids.push(manager.create(&ctx, &name).unwrap());
            }
            ids
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "duplicate id allocated: {}", id);
            assert!(id.data() >= 1);
        }
    }
    assert_eq!(manager.table().live_count(), 8 * 16);
}

#[test]
fn create_after_interleaved_destroys_reuses_lowest_id() {
    let manager = ZoneManager::new(Arc::new(ProcessTable::new()));
    let ctx = root_caller();

    let a = manager.create(&ctx, "a").unwrap();
    let b = manager.create(&ctx, "b").unwrap();
    let c = manager.create(&ctx, "c").unwrap();
    assert_eq!((a.data(), b.data(), c.data()), (1, 2, 3));

    manager.destroy(&ctx, a).unwrap();
    manager.destroy(&ctx, c).unwrap();

    // 最小的空洞先被填上
    assert_eq!(manager.create(&ctx, "d").unwrap().data(), 1);
    assert_eq!(manager.create(&ctx, "e").unwrap().data(), 3);
    assert_eq!(manager.create(&ctx, "f").unwrap().data(), 4);
}

#[test]
fn enter_then_destroy_reports_busy() {
    let roster = Arc::new(ProcessTable::new());
    let manager = ZoneManager::new(roster.clone());
    let ctx = root_caller();

    let id = manager.create(&ctx, "workload").unwrap();
    roster.register(ctx.pid());
    manager.enter(&ctx, id).unwrap();

    assert_eq!(manager.destroy(&ctx, id), Err(ZoneError::Busy));

    // 成员退出后可以销毁
    roster.set_zone(ctx.pid(), ZoneId::ROOT);
    assert_eq!(manager.destroy(&ctx, id), Ok(()));
}

#[derive(Debug, Clone)]
enum Op {
    Create(usize),
    Destroy(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::Create),
        (1i32..8).prop_map(Op::Destroy),
    ]
}

proptest! {
    /// 任意 create/destroy 序列之后，存活记录的 id 与名称始终两两唯一
    #[test]
    fn ids_and_names_stay_unique(ops in proptest::collection::vec(op_strategy(), 1..64)) {
        let manager = ZoneManager::new(Arc::new(ProcessTable::new()));
        let ctx = root_caller();
        let names = ["z0", "z1", "z2", "z3", "z4", "z5", "z6", "z7"];

        for op in ops {
            match op {
                Op::Create(n) => {
                    let _ = manager.create(&ctx, names[n]);
                }
                Op::Destroy(id) => {
                    let _ = manager.destroy(&ctx, ZoneId::new(id));
                }
            }

            let ids = manager.table().snapshot_ids();
            let unique_ids: HashSet<_> = ids.iter().copied().collect();
            prop_assert_eq!(unique_ids.len(), ids.len());

            let mut seen_names = HashSet::new();
            for id in &ids {
                prop_assert!(id.data() >= 1);
                let name = manager.name_of(&ctx, *id).unwrap();
                prop_assert!(seen_names.insert(name));
            }
        }
    }
}
