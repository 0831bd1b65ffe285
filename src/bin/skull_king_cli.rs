// src/bin/skull_king_cli.rs
//
// Dev-CLI счётчика: одна команда за запуск поверх файлового снапшота.
//
//   skull_king_cli show
//   skull_king_cli bid 1 2
//   skull_king_cli phase
//   skull_king_cli tricks 1 2
//   skull_king_cli card 1 pirate
//   skull_king_cli standings

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skull_king_engine::api::{
    Command, CommandResponse, QueryResponse, Query, ScoreboardDto,
};
use skull_king_engine::config::{EditPolicy, EngineConfig, StoreConfig, MOBILE_STORAGE_KEY};
use skull_king_engine::domain::PlayerId;
use skull_king_engine::infra::{FileBackend, StateStore, UuidIds};
use skull_king_engine::Scorekeeper;

#[derive(Parser)]
#[command(name = "skull_king_cli")]
#[command(about = "Skull King score keeper backed by a local JSON snapshot")]
struct Args {
    /// Каталог со снапшотом (по умолчанию SKULL_KING_STATE_DIR или `.`)
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Ключ снапшота (по умолчанию SKULL_KING_STORAGE_KEY или ключ браузерной версии)
    #[arg(long, conflicts_with = "mobile")]
    key: Option<String>,

    /// Использовать ключ мобильной версии
    #[arg(long)]
    mobile: bool,

    /// Политика редактирования: phase-gated | always-editable
    #[arg(long)]
    edit_policy: Option<EditPolicy>,

    /// Подробное логирование
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Игрок указывается номером в экипаже (1-based) или ID.
#[derive(Subcommand)]
enum Action {
    /// Табло текущего раунда
    Show,
    /// Таблица лидеров
    Standings,
    /// Каталог бонусных карт
    Cards,
    /// Конфиг партии
    Config,
    /// Добавить игрока
    AddPlayer,
    /// Убрать игрока
    RemovePlayer { player: String },
    /// Переименовать игрока
    Rename { player: String, name: String },
    /// Заявка на текущий раунд
    Bid { player: String, value: String },
    /// Взятки за текущий раунд
    Tricks { player: String, value: String },
    /// Бонус за текущий раунд
    Bonus { player: String, value: String },
    /// Прибавить значение карты к бонусу игрока
    Card { player: String, card_id: String },
    /// Изменить значение карты в каталоге
    CardValue { card_id: String, value: String },
    /// Длина партии (5..=14)
    Rounds { value: String },
    /// Перейти к раунду
    Round { value: String },
    /// Переключить фазу заявок/результатов
    Phase,
    /// Закрыть раунд
    Complete,
    /// Стереть все очки
    Reset,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut store_config = StoreConfig::from_env();
    if let Some(dir) = args.state_dir {
        store_config.state_dir = dir;
    }
    if let Some(key) = args.key {
        store_config.storage_key = key;
    } else if args.mobile {
        store_config.storage_key = MOBILE_STORAGE_KEY.to_string();
    }

    let mut engine = EngineConfig::from_env();
    if let Some(policy) = args.edit_policy {
        engine.edit_policy = policy;
    }

    let store: StateStore<FileBackend> = StateStore::from_config(&store_config);
    let mut keeper = Scorekeeper::open(store, UuidIds, engine);

    match run(&mut keeper, args.action) {
        Ok(()) => ExitCode::SUCCESS,
        Err(notice) => {
            eprintln!("{}", notice);
            ExitCode::FAILURE
        }
    }
}

fn run(keeper: &mut Scorekeeper<FileBackend, UuidIds>, action: Action) -> Result<(), String> {
    let command = match action {
        Action::Show => return print_query(keeper, Query::Scoreboard),
        Action::Standings => return print_query(keeper, Query::Standings),
        Action::Cards => return print_query(keeper, Query::Cards),
        Action::Config => return print_query(keeper, Query::Config),
        Action::AddPlayer => Command::AddPlayer,
        Action::RemovePlayer { player } => Command::RemovePlayer {
            player_id: resolve_player(keeper, &player)?,
        },
        Action::Rename { player, name } => Command::RenamePlayer {
            player_id: resolve_player(keeper, &player)?,
            name,
        },
        Action::Bid { player, value } => Command::SetBid {
            player_id: resolve_player(keeper, &player)?,
            raw: value,
        },
        Action::Tricks { player, value } => Command::SetTricks {
            player_id: resolve_player(keeper, &player)?,
            raw: value,
        },
        Action::Bonus { player, value } => Command::SetBonus {
            player_id: resolve_player(keeper, &player)?,
            raw: value,
        },
        Action::Card { player, card_id } => {
            // В интерфейсе это два события: фокус на поле бонуса и нажатие карты.
            let player_id = resolve_player(keeper, &player)?;
            keeper
                .execute(Command::FocusBonus { player_id })
                .map_err(|e| e.notice())?;
            Command::ApplyBonusCard { card_id }
        }
        Action::CardValue { card_id, value } => Command::SetCardValue { card_id, raw: value },
        Action::Rounds { value } => Command::SetTotalRounds { raw: value },
        Action::Round { value } => Command::SelectRound { raw: value },
        Action::Phase => Command::TogglePhase,
        Action::Complete => Command::CompleteRound,
        Action::Reset => Command::ResetGame,
    };

    match keeper.execute(command).map_err(|e| e.notice())? {
        CommandResponse::Updated(board) => print_scoreboard(&board),
        CommandResponse::PlayerAdded {
            player_id,
            scoreboard,
        } => {
            println!("Добавлен игрок {}", player_id);
            print_scoreboard(&scoreboard);
        }
        CommandResponse::FocusChanged { target } => {
            println!("Поле бонуса: {:?}", target);
        }
    }
    Ok(())
}

/// Номер в экипаже (1-based) или ID как есть.
fn resolve_player(
    keeper: &Scorekeeper<FileBackend, UuidIds>,
    reference: &str,
) -> Result<PlayerId, String> {
    let players = &keeper.state().players;

    if let Ok(index) = reference.parse::<usize>() {
        return players
            .get(index.wrapping_sub(1))
            .map(|p| p.id.clone())
            .ok_or_else(|| format!("Нет игрока с номером {}", index));
    }

    Ok(PlayerId::new(reference))
}

fn print_query(keeper: &Scorekeeper<FileBackend, UuidIds>, query: Query) -> Result<(), String> {
    match keeper.query(&query) {
        QueryResponse::Scoreboard(board) => print_scoreboard(&board),
        QueryResponse::Standings(rows) => {
            for row in rows {
                println!("{:>2}. {:<24} {:>6} pts", row.rank, row.name, row.total);
            }
        }
        QueryResponse::Cards(cards) => {
            for card in cards {
                println!("{:<16} {:<28} {}", card.id, card.label, card.caption);
            }
        }
        QueryResponse::Config(cfg) => {
            println!(
                "Manche {}/{} | phase={:?} | policy={}",
                cfg.current_round, cfg.total_rounds, cfg.phase, cfg.edit_policy
            );
        }
    }
    Ok(())
}

fn print_scoreboard(board: &ScoreboardDto) {
    println!(
        "=== Manche {}/{} | phase={:?} ===",
        board.current_round, board.total_rounds, board.phase
    );
    for (idx, row) in board.rows.iter().enumerate() {
        let focus = if row.bonus_focused { "*" } else { " " };
        println!(
            "{:>2}. {:<24} annonce={:>2} plis={:>2} bonus={:>4}{} | manche={:>5} | total={:>6}",
            idx + 1,
            row.name,
            row.bid,
            row.tricks,
            row.bonus,
            focus,
            row.round_score,
            row.total
        );
    }
}
