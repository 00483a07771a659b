// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use crate::store::Ledger;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(store: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind = sub.get_one::<String>("kind").unwrap().parse()?;
            let parent = sub.get_one::<i64>("parent").copied();
            let color = sub.get_one::<String>("color").map(|s| s.as_str());
            let category = store.add_category(name, kind, parent, color)?;
            println!("Added category '{}' ({})", category.name, category.kind);
        }
        Some(("list", _)) => {
            let categories = store.list_categories()?;
            let names: HashMap<i64, String> = categories
                .iter()
                .map(|c| (c.id, c.name.clone()))
                .collect();
            let mut data = Vec::new();
            for c in categories {
                let parent = c
                    .parent_id
                    .and_then(|id| names.get(&id).cloned())
                    .unwrap_or_default();
                data.push(vec![
                    c.id.to_string(),
                    c.name,
                    c.kind.to_string(),
                    parent,
                    c.color_code.unwrap_or_default(),
                ]);
            }
            println!(
                "{}",
                pretty_table(&["Id", "Name", "Kind", "Parent", "Color"], data)
            );
        }
        Some(("update", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let name = sub.get_one::<String>("name").map(|s| s.as_str());
            let parent = sub.get_one::<i64>("parent").copied();
            let color = sub.get_one::<String>("color").map(|s| s.as_str());
            let category = store.update_category(id, name, parent, color)?;
            println!("Updated category '{}'", category.name);
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.delete_category(id)?;
            println!("Removed category {}", id);
        }
        _ => {}
    }
    Ok(())
}
