//! `roles` command handler

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::Context;
use crate::permissions::{Permission, Role};

#[derive(Args, Debug)]
pub struct RolesArgs {
    /// Only show this role's permissions
    #[arg(value_enum, value_name = "ROLE")]
    pub name: Option<Role>,
}

/// Handle the roles command
pub fn handle(ctx: &Context, args: RolesArgs) -> Result<ExitCode> {
    match args.name {
        Some(role) => {
            println!("{}", format!("Permissions for {}", role).bold());
            for permission in role.permissions() {
                if permission.is_read_only() {
                    println!("  {}", permission);
                } else {
                    println!("  {}", permission.to_string().yellow());
                }
            }
        }
        None => {
            print!("{}", permission_matrix());
            println!();
            println!("You are acting as: {}", ctx.role.to_string().cyan());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Table of every permission against every role
pub fn permission_matrix() -> String {
    let name_width = Permission::ALL
        .iter()
        .map(|p| p.display_name().len())
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<width$}", "permission", width = name_width);
    for role in Role::ALL {
        out.push_str(&format!("  {:^9}", role.display_name()));
    }
    out.push('\n');

    for permission in Permission::ALL {
        out.push_str(&format!("{:<width$}", permission.display_name(), width = name_width));
        for role in Role::ALL {
            let mark = if role.can(*permission) { "✓" } else { "·" };
            out.push_str(&format!("  {:^9}", mark));
        }
        out.push('\n');
    }

    out
}
