//! Build agent snapshots from TOML scenario files

use crate::agent::AgentSnapshot;
use crate::ammo::{AmmoAdder, AmmoKind, AmmoLink, AmmoSet, CaliberId};
use crate::core::error::{ReloadError, Result};
use crate::core::types::{AgentId, AmmoKindId, AmmoLinkId, WeaponId};
use crate::inventory::Inventory;
use crate::loadout::{AllocationPolicy, GenericCategory, HoldRecord, LoadoutSlot};
use crate::scenario::file::{CategoryEntry, ScenarioFile, SlotEntry, WeaponEntry};
use crate::weapon::{AmmoUser, Weapon};
use ahash::AHashMap;
use std::fs;
use std::path::Path;

/// A loaded scenario: one agent and the name it was given
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub agent: AgentSnapshot,
}

impl Scenario {
    /// Find a weapon by id, equipped or carried
    pub fn weapon(&self, id: WeaponId) -> Option<&Weapon> {
        let carried = self
            .agent
            .inventory
            .iter()
            .flat_map(|inv| inv.ranged_weapons());
        self.agent.equipped.iter().chain(carried).find(|w| w.id == id)
    }

    pub fn link_name(&self, weapon: WeaponId, link: AmmoLinkId) -> Option<&str> {
        self.weapon(weapon)?
            .ammo_user
            .as_ref()?
            .ammo_set
            .link(link)
            .map(|l| l.name.as_str())
    }
}

/// Load a scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let contents = fs::read_to_string(path)?;
    parse_scenario(&contents)
}

/// Parse a scenario from TOML text
pub fn parse_scenario(contents: &str) -> Result<Scenario> {
    let file: ScenarioFile = toml::from_str(contents)?;
    ScenarioBuilder::new(&file)?.build(&file)
}

struct ScenarioBuilder {
    kinds: AHashMap<String, AmmoKind>,
    sets: AHashMap<String, AmmoSet>,
    next_weapon: u32,
}

impl ScenarioBuilder {
    fn new(file: &ScenarioFile) -> Result<Self> {
        let mut kinds = AHashMap::new();
        for (idx, entry) in file.ammo.iter().enumerate() {
            let id = AmmoKindId(u32::try_from(idx).map_err(|_| {
                ReloadError::InvalidScenario("too many ammo kinds".to_string())
            })?);
            let kind = AmmoKind::new(id, CaliberId(entry.caliber), entry.class);
            if kinds.insert(entry.name.clone(), kind).is_some() {
                return Err(ReloadError::InvalidScenario(format!(
                    "ammo kind '{}' defined twice",
                    entry.name
                )));
            }
        }

        let mut builder = Self {
            kinds,
            sets: AHashMap::new(),
            next_weapon: 1,
        };

        for entry in &file.ammo_sets {
            let mut links = Vec::with_capacity(entry.links.len());
            for link in &entry.links {
                let adders = link
                    .adders
                    .iter()
                    .map(|a| Ok(AmmoAdder::new(builder.kind(&a.ammo)?, a.charges)))
                    .collect::<Result<Vec<_>>>()?;
                links.push(AmmoLink::new(link.name.clone(), adders));
            }
            builder
                .sets
                .insert(entry.name.clone(), AmmoSet::new(entry.name.clone(), links));
        }

        Ok(builder)
    }

    fn kind(&self, name: &str) -> Result<AmmoKind> {
        self.kinds
            .get(name)
            .copied()
            .ok_or_else(|| ReloadError::UnknownAmmoKind(name.to_string()))
    }

    fn build(mut self, file: &ScenarioFile) -> Result<Scenario> {
        let equipped = file
            .equipped
            .as_ref()
            .map(|w| self.weapon(w))
            .transpose()?;

        let mut inventory = Inventory::new();
        for entry in &file.carried_weapons {
            inventory = inventory.with_weapon(self.weapon(entry)?);
        }
        for stack in &file.inventory {
            inventory = inventory.with_ammo(self.kind(&stack.ammo)?, stack.count);
        }

        let policy = match &file.loadout {
            Some(loadout) => {
                let mut policy = AllocationPolicy::new(loadout.name.clone());
                for slot in &loadout.slots {
                    policy = policy.with_slot(self.slot(slot)?);
                }
                Some(policy)
            }
            None => None,
        };

        let holds = file
            .holds
            .iter()
            .map(|h| Ok(HoldRecord::new(self.kind(&h.ammo)?, h.count)))
            .collect::<Result<Vec<_>>>()?;

        let agent = AgentSnapshot {
            id: AgentId::new(),
            inventory: file.has_inventory.then_some(inventory),
            equipped,
            policy,
            holds,
            drafted: file.drafted,
        };

        tracing::debug!(scenario = %file.name, "scenario loaded");
        Ok(Scenario {
            name: file.name.clone(),
            agent,
        })
    }

    fn weapon(&mut self, entry: &WeaponEntry) -> Result<Weapon> {
        let id = WeaponId(self.next_weapon);
        self.next_weapon += 1;

        let Some(magazine) = &entry.magazine else {
            return Ok(Weapon::melee(id, entry.name.clone()));
        };

        let set = self
            .sets
            .get(&magazine.ammo_set)
            .cloned()
            .ok_or_else(|| {
                ReloadError::InvalidScenario(format!(
                    "weapon '{}' uses unknown ammo set '{}'",
                    entry.name, magazine.ammo_set
                ))
            })?;

        let link_id = |name: &str| {
            set.link_by_name(name).ok_or_else(|| ReloadError::UnknownLink {
                weapon: entry.name.clone(),
                link: name.to_string(),
            })
        };

        let selected = link_id(&magazine.selected)?;
        let loaded = magazine
            .loaded
            .iter()
            .map(|l| Ok((link_id(&l.link)?, self.kind(&l.ammo)?, l.count)))
            .collect::<Result<Vec<_>>>()?;

        let mut user = AmmoUser::new(magazine.size, set, selected);
        if !magazine.use_ammo {
            user = user.without_ammo();
        }
        for (link, kind, count) in loaded {
            user = user.with_loaded(link, kind, count);
        }
        if let Some(count) = magazine.count {
            user = user.with_mag_count(count);
        }

        Ok(Weapon::ranged(id, entry.name.clone(), user))
    }

    fn slot(&self, entry: &SlotEntry) -> Result<LoadoutSlot> {
        match (&entry.ammo, &entry.category) {
            (Some(ammo), None) => Ok(LoadoutSlot::exact(self.kind(ammo)?, entry.count)),
            (None, Some(category)) => Ok(LoadoutSlot::generic(generic_category(category), entry.count)),
            _ => Err(ReloadError::InvalidScenario(
                "loadout slot needs exactly one of 'ammo' or 'category'".to_string(),
            )),
        }
    }
}

fn generic_category(entry: &CategoryEntry) -> GenericCategory {
    let name = entry.name.clone().unwrap_or_else(|| "generic".to_string());
    let caliber = entry.caliber.map(CaliberId);
    let class = entry.class;
    GenericCategory::new(name, move |k| {
        caliber.map_or(true, |c| k.caliber == c) && class.map_or(true, |c| k.class == c)
    })
}
