use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::db_utils::{check_events_decode, check_integrity};
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // Single shared DB handle across the requested actions
        let mut pool: Option<DbPool> = None;

        fn get_pool<'a>(pool: &'a mut Option<DbPool>, db_path: &str) -> AppResult<&'a mut DbPool> {
            if pool.is_none() {
                *pool = Some(DbPool::new(db_path)?);
            }
            Ok(pool.as_mut().expect("pool was just created"))
        }

        //
        // 1) MIGRATE
        //
        if *migrate {
            let pool = get_pool(&mut pool, &cfg.database)?;
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&pool.conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) CHECK
        //
        if *check {
            let pool = get_pool(&mut pool, &cfg.database)?;
            println!("{}▶ Checking database…{}", CYAN, RESET);
            check_integrity(pool)?;
            let checked = check_events_decode(pool)?;
            println!(
                "{}✔ Integrity OK, {} event records decode cleanly.{}\n",
                GREEN, checked, RESET
            );
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            let pool = get_pool(&mut pool, &cfg.database)?;
            println!("{}▶ Optimizing database…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ VACUUM completed.{}\n", GREEN, RESET);
        }

        //
        // 4) INFO
        //
        if *info {
            let pool = get_pool(&mut pool, &cfg.database)?;
            stats::print_db_info(pool, &cfg.database)?;
        }
    }

    Ok(())
}
