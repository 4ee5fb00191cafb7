//! Repair Buff Simulator
//!
//! Loads a buff config, repeats one kit repair many times and reports how
//! often it buffs, which buffs it rolls and how much XP it grants.

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use repair_expansion::core::{ArmorType, ItemClass, ItemId, SkillId, TemplateId};
use repair_expansion::items::{catalog_from, ItemTemplate, RepairedItem};
use repair_expansion::repair::{RepairEnhancer, RepairOutcome};
use repair_expansion::settings::{install_live_settings, load_and_apply, LiveSettings};
use repair_expansion::skills::PlayerSkills;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClassArg {
    Armor,
    Vest,
    Headwear,
    FaceCover,
    Visor,
    Weapon,
}

impl From<ClassArg> for ItemClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Armor => ItemClass::Armor,
            ClassArg::Vest => ItemClass::Vest,
            ClassArg::Headwear => ItemClass::Headwear,
            ClassArg::FaceCover => ItemClass::FaceCover,
            ClassArg::Visor => ItemClass::Visor,
            ClassArg::Weapon => ItemClass::Weapon,
        }
    }
}

/// Repair Buff Simulator - buff rates for a repeated kit repair
#[derive(Parser, Debug)]
#[command(name = "repair_sim")]
#[command(about = "Simulate kit repairs and report buff and XP outcomes")]
struct Args {
    /// Buff config file (comments and trailing commas allowed)
    #[arg(long, default_value = "data/buffs.jsonc")]
    config: PathBuf,

    /// Item class being repaired
    #[arg(long, value_enum, default_value = "vest")]
    class: ClassArg,

    /// Heavy armor (levels HeavyVests instead of LightVests)
    #[arg(long)]
    heavy: bool,

    /// Template max durability
    #[arg(long, default_value_t = 100.0)]
    max_durability: f64,

    /// Item durability after the repair
    #[arg(long, default_value_t = 80.0)]
    durability: f64,

    /// Repair points restored by the kit
    #[arg(long, default_value_t = 30.0)]
    repair_points: f64,

    /// Governing vest skill progress (100 per level)
    #[arg(long, default_value_t = 1000.0)]
    progress: f64,

    /// Number of repairs to simulate
    #[arg(long, default_value_t = 10_000)]
    trials: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct SimulationResult {
    trials: u32,
    config_applied: bool,
    eligible: bool,
    probability: f64,
    buff_rate: f64,
    buffs: BTreeMap<String, u32>,
    xp_per_repair: f64,
    failures: u32,
    seed: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("repair_expansion=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut settings = LiveSettings::default();
    let config_applied = load_and_apply(&args.config, &mut settings);
    if !config_applied {
        tracing::warn!("Running with default buff settings");
    }
    if install_live_settings(settings).is_err() {
        eprintln!("Live settings were already installed");
        return ExitCode::FAILURE;
    }

    let armor_type = if args.heavy {
        ArmorType::Heavy
    } else {
        ArmorType::Light
    };
    let template = ItemTemplate::new("sim_item", args.class.into(), args.max_durability)
        .with_armor_type(armor_type);
    let catalog = catalog_from([template]);

    let skill = armor_type.governing_skill();
    let progress = PlayerSkills::new()
        .with_progress(skill, args.progress)
        .with_progress(SkillId::WeaponTreatment, args.progress);

    let enhancer = RepairEnhancer::with_live_settings(&catalog);

    let mut buffs: BTreeMap<String, u32> = BTreeMap::new();
    let mut buffed = 0u32;
    let mut failures = 0u32;
    let mut total_xp = 0.0;
    let mut eligible = false;
    let mut probability = 0.0;

    for _ in 0..args.trials {
        let item = RepairedItem::new(
            ItemId::new("sim"),
            TemplateId::new("sim_item"),
            args.durability,
        );
        let mut outcome = RepairOutcome::by_kit(item, args.repair_points);
        let result = enhancer.enhance(&mut outcome, &progress, &mut rng);

        if let Some(decision) = result.decision {
            eligible = decision.eligible;
            probability = decision.probability;
        }
        if let Some(grant) = result.skill_grant {
            total_xp += grant.points;
        }
        if let Some(buff) = result.buff {
            buffed += 1;
            *buffs
                .entry(format!("{} {}", buff.rarity, buff.bonus_type))
                .or_insert(0) += 1;
        }
        failures += result.errors.len() as u32;
    }

    let trials = args.trials.max(1) as f64;
    let result = SimulationResult {
        trials: args.trials,
        config_applied,
        eligible,
        probability,
        buff_rate: buffed as f64 / trials,
        buffs,
        xp_per_repair: total_xp / trials,
        failures,
        seed,
    };

    match args.format.as_str() {
        "text" => {
            println!("Repair Simulation");
            println!("=================");
            println!("Trials: {}", result.trials);
            println!("Config applied: {}", result.config_applied);
            println!("Eligible: {}", result.eligible);
            println!("Buff chance: {:.3}", result.probability);
            println!("Observed buff rate: {:.3}", result.buff_rate);
            for (buff, count) in &result.buffs {
                println!("  {}: {}", buff, count);
            }
            println!("XP per repair: {:.3} ({})", result.xp_per_repair, skill);
            println!("Failures: {}", result.failures);
            println!("Seed: {}", result.seed);
        }
        format => {
            if format != "json" {
                eprintln!("Unknown format '{}', defaulting to json", format);
            }
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Failed to serialize result: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
