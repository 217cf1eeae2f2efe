// src/bin/blackjack_dev_cli.rs
//
use blackjack_engine::api::{build_dealer_view, build_player_view, to_json};
use blackjack_engine::domain::{Chips, Dealer, Deck, Hand, HandHolder, Player, TableRules};
use blackjack_engine::engine::{validate_pack_count, validate_player_count, Action, EngineError};
use clap::Parser;

/// Боты добирают, пока меньше этого числа. Дилер тоже.
const STAND_ON: u32 = 17;

/// Dev-CLI: один раунд с ботами на детерминированном шузе.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Seed для перемешивания шуза
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Число ботов за столом
    #[arg(long, default_value_t = 3)]
    players: u32,

    /// Число колод в шузе
    #[arg(long, default_value_t = 6)]
    packs: u32,

    /// Подробный лог (TRACE)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        })
        .init();

    println!("blackjack_dev_cli: seed={} players={} packs={}", args.seed, args.players, args.packs);

    if let Err(e) = run(&args) {
        println!("[CLI] ОШИБКА: {e}");
        std::process::exit(1);
    }
    println!("[CLI] Завершение работы dev-CLI.");
}

fn run(args: &CliArgs) -> Result<(), EngineError> {
    let rules = TableRules::default();
    validate_pack_count(args.packs, &rules)?;
    validate_player_count(args.players, &rules)?;

    let mut deck = Deck::new(args.packs, &rules)?;
    deck.shuffle_seeded(args.seed);

    let mut players = (1..=args.players)
        .map(|n| Player::new(format!("BOT {n}"), Chips(500)))
        .collect::<Result<Vec<_>, _>>()?;
    let mut dealer = Dealer::new();

    // 1. Ставки и раздача: по карте всем, затем дилеру, два круга.
    for p in players.iter_mut() {
        p.open_hand(Chips(50), &rules)?;
    }
    dealer.give_hand(Hand::new());
    for _ in 0..2 {
        for p in players.iter_mut() {
            let card = deck.draw()?;
            p.current_hand_mut()
                .ok_or(EngineError::NoActiveHand)?
                .add_card(card);
        }
        let card = deck.draw()?;
        dealer
            .current_hand_mut()
            .ok_or(EngineError::NoDealerHand)?
            .add_card(card);
    }

    println!();
    println!("================ DEAL =================");
    println!("Дилер показывает {}", dealer.upcard()?);
    if dealer.can_offer_insurance()? {
        println!("Дилер предлагает страховку.");
    }

    // 2. Ходы игроков.
    for p in players.iter_mut() {
        play_bot(p, &mut deck, &rules)?;
        let view = build_player_view(p, &rules);
        println!("{}", to_json(&view).unwrap_or_else(|e| e.to_string()));
    }

    // 3. Ход дилера.
    while dealer.current_hand().is_some_and(|h| h.score() < STAND_ON) {
        dealer.hit(&mut deck)?;
    }
    if dealer.current_hand().is_some() {
        dealer.stand()?;
    }

    println!();
    println!("================ SHOWDOWN =================");
    println!(
        "{}",
        to_json(&build_dealer_view(&dealer, true)).unwrap_or_else(|e| e.to_string())
    );
    for p in &players {
        for (i, hand) in p.all_hands().iter().enumerate() {
            println!(
                "{} рука #{}: [{}] = {}{}",
                p.name(),
                i,
                hand,
                hand.score(),
                if hand.is_bust() { " (перебор)" } else { "" }
            );
        }
    }
    println!("Осталось карт в шузе: {}", deck.len());
    Ok(())
}

/// Простая стратегия бота: сплит пар, удвоение на 10–11, добор до 17.
fn play_bot(player: &mut Player, deck: &mut Deck, rules: &TableRules) -> Result<(), EngineError> {
    while let Some(hand) = player.current_hand() {
        let score = hand.score();
        let choices = player.action_choices(rules)?;

        let action = if choices.contains(&Action::Split) {
            Action::Split
        } else if choices.contains(&Action::DoubleDown) && (score == 10 || score == 11) {
            Action::DoubleDown
        } else if score < STAND_ON {
            Action::Hit
        } else {
            Action::Stick
        };

        println!("[CLI] {} ({}): {}", player.name(), score, action);
        match action {
            Action::Hit => {
                player.hit(deck)?;
            }
            Action::Stick => player.stand()?,
            Action::Split => player.split(deck, rules)?,
            Action::DoubleDown => {
                player.double_down(deck)?;
            }
        }
    }
    Ok(())
}
