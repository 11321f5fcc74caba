use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reload_check::agent::AgentSnapshot;
use reload_check::ammo::{AmmoAdder, AmmoClass, AmmoKind, AmmoLink, AmmoSet, CaliberId};
use reload_check::core::config::ReloadConfig;
use reload_check::core::types::{AgentId, AmmoKindId, AmmoLinkId, WeaponId};
use reload_check::inventory::Inventory;
use reload_check::loadout::{AllocationPolicy, GenericCategory, LoadoutSlot};
use reload_check::reload::{evaluate_agents, evaluate_reload_need};
use reload_check::weapon::{AmmoUser, Weapon};

fn kinds() -> Vec<AmmoKind> {
    (0..6)
        .map(|i| {
            let class = if i % 2 == 0 { AmmoClass::Ball } else { AmmoClass::ArmorPiercing };
            AmmoKind::new(AmmoKindId(i), CaliberId(556), class)
        })
        .collect()
}

fn soldier(seed: u32) -> AgentSnapshot {
    let kinds = kinds();
    let links = kinds
        .iter()
        .map(|k| AmmoLink::new(format!("link {}", k.id.0), vec![AmmoAdder::new(*k, 1)]))
        .collect();
    let set = AmmoSet::new("5.56", links);

    let rifle = |id: u32, loaded: i32| {
        Weapon::ranged(
            WeaponId(id),
            "rifle",
            AmmoUser::new(30, set.clone(), AmmoLinkId(0))
                .with_loaded(AmmoLinkId(0), kinds[0], 1)
                .with_mag_count(loaded),
        )
    };

    let mut inventory = Inventory::new();
    for i in 1..4 {
        inventory = inventory.with_weapon(rifle(i, 30));
    }
    for k in kinds.iter().skip(1) {
        inventory = inventory.with_ammo(*k, 5 + seed % 40);
    }

    let policy = AllocationPolicy::new("AP rifleman")
        .with_slot(LoadoutSlot::exact(kinds[5], 20))
        .with_slot(LoadoutSlot::generic(
            GenericCategory::class("any AP", AmmoClass::ArmorPiercing),
            60,
        ));

    AgentSnapshot::new(AgentId::new())
        .with_equipped(rifle(0, (seed % 31) as i32))
        .with_inventory(inventory)
        .with_policy(policy)
}

fn bench_single(c: &mut Criterion) {
    let agent = soldier(7);
    c.bench_function("evaluate_reload_need", |b| {
        b.iter(|| evaluate_reload_need(black_box(&agent)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let agents: Vec<_> = (0..2000).map(soldier).collect();
    let config = ReloadConfig::default();
    c.bench_function("evaluate_agents_2000", |b| {
        b.iter(|| evaluate_agents(black_box(&agents), &config))
    });
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
