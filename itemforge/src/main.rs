use std::{path::PathBuf, time::Instant};

use itertools::Itertools;
use itemforge::{config::catalog_hook, ItemDeserializer, ItemForgeError};
use itemforge_config::{load_table, ENGINE_CONFIG};
use itemforge_core::text::legacy;
use itemforge_hooks::{HookRegistryBuilder, PresentPlugins};
use itemforge_world::ItemStack;

fn init_logger() {
    if ENGINE_CONFIG.logging.enabled {
        let mut logger = simple_logger::SimpleLogger::new();
        logger = logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        if !ENGINE_CONFIG.logging.timestamp {
            logger = logger.without_timestamps();
        }

        if ENGINE_CONFIG.logging.env {
            logger = logger.env();
        }

        logger = logger.with_level(ENGINE_CONFIG.logging.level.into());

        logger = logger.with_colors(ENGINE_CONFIG.logging.color);
        logger = logger.with_threads(ENGINE_CONFIG.logging.threads);
        logger.init().unwrap();
    }
}

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const HOOKS: &str = "hooks";
const ITEMS: &str = "items";

fn main() {
    let time = Instant::now();
    init_logger();

    log::info!("Starting itemforge {CARGO_PKG_VERSION}");

    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(&ENGINE_CONFIG.items.path), PathBuf::from);
    let table = match load_table(&path) {
        Ok(table) => toml::Value::Table(table),
        Err(error) => {
            error.log();
            std::process::exit(1);
        }
    };

    let deserializer = ItemDeserializer::new(ENGINE_CONFIG.items.flag_policy);

    let mut builder = HookRegistryBuilder::new();
    if let Some(toml::Value::Table(catalogs)) = table.get(HOOKS) {
        for (id, section) in catalogs {
            builder.register(catalog_hook(id, section, &deserializer));
        }
    }
    let environment = PresentPlugins::new(&ENGINE_CONFIG.hooks.present);
    let hooks = match itemforge_hooks::install(builder.activate(&environment)) {
        Ok(hooks) => hooks,
        Err(error) => {
            error.log();
            std::process::exit(1);
        }
    };

    let mut built = 0;
    if let Some(toml::Value::Table(items)) = table.get(ITEMS) {
        for (name, section) in items {
            match deserializer.deserialize_item(section, hooks) {
                Some(item) => {
                    built += 1;
                    if item.is_oversized() {
                        log::warn!(
                            "{name} stacks {} {} but the material holds {}",
                            item.amount(),
                            item.type_name(),
                            item.material().max_stack
                        );
                    }
                    println!("{}", describe(name, &item));
                }
                None => log::warn!("{name} produced no item"),
            }
        }
    }

    log::info!(
        "Built {built} items from {} in {}ms",
        path.display(),
        time.elapsed().as_millis()
    );
}

/// Console form of a `§`-formatted line, plain when colors are off.
fn render(text: &str) -> String {
    if ENGINE_CONFIG.logging.color {
        legacy::to_pretty_console(text)
    } else {
        legacy::strip(text)
    }
}

fn describe(name: &str, item: &ItemStack) -> String {
    let mut lines = vec![format!("[{name}] {} x{}", item.type_name(), item.amount())];
    let Some(meta) = item.meta() else {
        return lines.join("\n");
    };

    if let Some(display_name) = meta.display_name() {
        lines.push(format!("  name: {}", render(display_name)));
    }
    for line in meta.lore().unwrap_or_default() {
        lines.push(format!("  | {}", render(line)));
    }
    if !meta.enchants().is_empty() {
        lines.push(format!(
            "  enchants: {}",
            meta.enchants()
                .iter()
                .map(|(enchantment, level)| format!("{enchantment} {level}"))
                .join(", ")
        ));
    }
    if !meta.item_flags().is_empty() {
        lines.push(format!("  flags: {}", meta.item_flags().iter().join(", ")));
    }
    if let Some(profile) = meta.skull().and_then(|skull| skull.profile()) {
        let owner = profile.name.as_deref().unwrap_or("<textured>");
        lines.push(format!("  owner: {owner} ({})", profile.id));
    }
    if let Some(color) = meta.color() {
        lines.push(format!("  color: {color:?}"));
    }
    if !meta.persistent_data().is_empty() {
        lines.push(format!(
            "  tags: {}",
            meta.persistent_data()
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .join(", ")
        ));
    }
    lines.join("\n")
}
