//! Replays a scripted pointer/button session against a logging host.
//!
//! Run with `RUST_LOG=debug` to see the deck's own navigation decisions
//! alongside the host-side transform log.

use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use carddeck::{CardTransform, ControlVisibility, Deck, DeckArgs, DeckHost};

/// Host that renders by logging. Stands in for a real view layer.
struct LogHost {
    cards: usize,
    width: f32,
}

impl DeckHost for LogHost {
    fn card_count(&self) -> usize {
        self.cards
    }

    fn viewport_width(&self) -> f32 {
        self.width
    }

    fn set_transform(&mut self, card: usize, transform: CardTransform, animated: bool) {
        info!(
            card,
            translate_x = transform.translate_x,
            scale = transform.scale,
            animated,
            "transform"
        );
    }

    fn controls_changed(&mut self, visibility: ControlVisibility) {
        info!(prev = visibility.prev, next = visibility.next, "controls");
    }

    fn deck_updated(&mut self, current: usize) {
        info!(current, "update");
    }

    fn drag_progression(&mut self, ratio: f32) {
        info!(ratio, "progression");
    }
}

fn settle(deck: &Arc<Mutex<Deck<LogHost>>>, ease: f32) {
    thread::sleep(Duration::from_secs_f32(ease) + Duration::from_millis(10));
    deck.lock().tick(Instant::now());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = DeckArgs::default().ease(0.05);
    let ease = args.ease;
    let host = LogHost {
        cards: 6,
        width: 320.0,
    };
    let deck = Arc::new(Mutex::new(Deck::mount(host, args)));

    info!(
        total = deck.lock().total(),
        current = deck.lock().current(),
        "mounted"
    );

    info!("--- button: next ---");
    deck.lock().next(Instant::now());
    settle(&deck, ease);

    info!("--- swipe left past the threshold ---");
    {
        let mut deck = deck.lock();
        deck.pointer_start(260.0, 100.0);
        deck.pointer_move(200.0, 104.0);
        deck.pointer_move(150.0, 108.0);
        deck.pointer_end(Instant::now());
    }
    settle(&deck, ease);

    info!("--- short drag snaps back ---");
    {
        let mut deck = deck.lock();
        deck.pointer_start(260.0, 100.0);
        deck.pointer_move(240.0, 100.0);
        deck.pointer_end(Instant::now());
    }
    settle(&deck, ease);

    info!("--- teleport to the last card ---");
    deck.lock().jump_to(5, Instant::now());
    settle(&deck, ease);

    info!("--- rotate: wider viewport ---");
    deck.lock().host_mut().width = 568.0;
    deck.lock().resized(Instant::now());
    settle(&deck, ease);

    info!(
        current = deck.lock().current(),
        total = deck.lock().total(),
        "session finished"
    );
}
