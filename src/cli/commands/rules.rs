use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::policy;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

/// Show or edit the lateness deduction ladder.
///
/// The policy engine only computes new rule vectors; persisting them back to
/// the configuration file happens here, in the caller.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rules { list, add, remove } = cmd {
        let mut current = cfg.clone();
        let mut changed = false;

        if let Some(spec) = add {
            let (minutes, amount) = parse_rule_spec(spec)?;
            current.deduction_rules =
                policy::add_rule(&current.deduction_rules, minutes, amount)?;
            changed = true;
            success(format!(
                "Added rule: more than {} minutes late → deduct {}.",
                minutes, amount
            ));
        }

        if let Some(n) = remove {
            // CLI positions are 1-based
            if *n == 0 {
                return Err(AppError::InvalidRule("positions start at 1".into()));
            }
            current.deduction_rules = policy::remove_rule(&current.deduction_rules, n - 1)?;
            changed = true;
            success(format!("Removed rule at position {}.", n));
        }

        if changed {
            current.save()?;
        }

        if *list || !changed {
            print_ladder(&current);
        }
    }

    Ok(())
}

/// Parse `MIN:AMOUNT`, e.g. `10:100`.
fn parse_rule_spec(spec: &str) -> AppResult<(i64, i64)> {
    let (min_str, amount_str) = spec
        .split_once(':')
        .ok_or_else(|| AppError::InvalidRule(format!("'{}' (expected MIN:AMOUNT)", spec)))?;

    let minutes: i64 = min_str
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidRule(format!("'{}' is not a number of minutes", min_str)))?;
    let amount: i64 = amount_str
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidRule(format!("'{}' is not an amount", amount_str)))?;

    Ok((minutes, amount))
}

fn print_ladder(cfg: &Config) {
    if cfg.deduction_rules.is_empty() {
        println!("No deduction rules configured.");
        return;
    }

    let mut table = Table::new(
        vec![
            Column {
                header: "#".into(),
                width: 3,
            },
            Column {
                header: "After (min)".into(),
                width: 11,
            },
            Column {
                header: "Deduction".into(),
                width: 9,
            },
        ],
        &cfg.separator_char,
    );

    for (i, rule) in cfg.deduction_rules.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            rule.minutes.to_string(),
            rule.amount.to_string(),
        ]);
    }

    print!("{}", table.render());
}
