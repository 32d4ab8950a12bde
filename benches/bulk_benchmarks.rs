// Performance benchmarks for swarm-keeper
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::RngExt;
use std::hint::black_box;
use std::sync::Arc;
use swarm_keeper::config::structs::configuration::Configuration;
use swarm_keeper::item::enums::item_state::ItemState;
use swarm_keeper::item::structs::item::Item;
use swarm_keeper::item::structs::item_id::ItemId;
use swarm_keeper::machine::enums::item_action::ItemAction;
use swarm_keeper::persistence::structs::json_state_backend::JsonStateBackend;
use swarm_keeper::swarm::structs::swarm_manager::SwarmManager;

fn random_item_id() -> ItemId {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    ItemId(bytes)
}

fn create_manager() -> Arc<SwarmManager> {
    let mut config = Configuration::init();
    config.core.hidden_passkey = "Bench-Passkey-123".to_string();
    config.persistence.enabled = false;
    Arc::new(SwarmManager::new(Arc::new(config)))
}

fn populate(manager: &SwarmManager, count: usize, state: ItemState) -> Vec<ItemId> {
    (0..count).map(|_| {
        let id = random_item_id();
        manager.add_item(Item::new(id, "bench", 4096).with_state(state)).unwrap();
        id
    }).collect()
}

fn bench_add_item(c: &mut Criterion) {
    let manager = create_manager();

    c.bench_function("add_item", |b| {
        b.iter(|| {
            black_box(manager.add_item(Item::new(random_item_id(), "bench", 4096)).unwrap());
        });
    });
}

fn bench_bulk_pause_resume(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_pause_resume");

    for size in [10, 100, 1000].iter() {
        let manager = create_manager();
        let ids = populate(&manager, *size, ItemState::Downloading);

        group.bench_with_input(BenchmarkId::from_parameter(size), &ids, |b, ids| {
            b.iter(|| {
                black_box(manager.apply_action(ItemAction::Pause, ids).unwrap());
                black_box(manager.apply_action(ItemAction::Resume, ids).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_list_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_items");

    for size in [100, 1000, 10000].iter() {
        let manager = create_manager();
        let ids = populate(&manager, *size, ItemState::Seeding);
        manager.apply_action(ItemAction::Hide, &ids[..size / 10]).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(manager.list_items());
            });
        });
    }

    group.finish();
}

fn bench_concurrent_bulk_actions(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let manager = create_manager();
    let ids = Arc::new(populate(&manager, 1000, ItemState::Downloading));

    c.bench_function("concurrent_bulk_actions", |b| {
        b.to_async(&rt).iter(|| {
            let manager = manager.clone();
            let ids = ids.clone();
            async move {
                let mut handles = Vec::with_capacity(4);
                for action in [ItemAction::Pause, ItemAction::Resume, ItemAction::Pause, ItemAction::Resume] {
                    let manager = manager.clone();
                    let ids = ids.clone();
                    handles.push(tokio::task::spawn_blocking(move || {
                        manager.apply_action(action, &ids).unwrap()
                    }));
                }
                for handle in handles {
                    black_box(handle.await.unwrap());
                }
            }
        });
    });
}

fn bench_save_updates(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let temp_dir = tempfile::tempdir().unwrap();
    let backend = rt.block_on(JsonStateBackend::new(temp_dir.path(), "Bench-Passkey-123")).unwrap();
    let manager = create_manager();
    let ids = populate(&manager, 1000, ItemState::Downloading);

    c.bench_function("save_updates_1000", |b| {
        b.to_async(&rt).iter(|| async {
            manager.apply_action(ItemAction::Pause, &ids).unwrap();
            manager.apply_action(ItemAction::Resume, &ids).unwrap();
            manager.save_updates(&backend).await.unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_add_item,
    bench_bulk_pause_resume,
    bench_list_items,
    bench_concurrent_bulk_actions,
    bench_save_updates,
);

criterion_main!(benches);
