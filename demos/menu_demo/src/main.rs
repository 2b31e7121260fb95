//! Scripted, headless menu-button session. Run with `RUST_LOG=debug` to see
//! the core's own transitions as well.

use std::sync::Arc;

use anyhow::Context;
use repose_menu::*;
use web_time::Duration;

/// Logs every effect the way a real platform adapter would apply it.
struct ConsoleHost {
    anchor: OffsetChain,
    labels: Vec<String>,
}

impl Positioner for ConsoleHost {
    fn anchor(&self) -> Rect {
        self.anchor.anchor()
    }
}

impl MenuHost for ConsoleHost {
    type Handle = usize;

    fn show(&mut self, origin: Vec2) {
        log::info!("show menu at left={} top={}", origin.x, origin.y);
    }
    fn hide(&mut self) {
        log::info!("hide menu");
    }
    fn set_expanded(&mut self, expanded: bool) {
        log::info!("controller expanded={expanded}");
    }
    fn focus_item(&mut self, item: &MenuItem<usize>) {
        log::info!("focus {:?}", item.label());
    }
    fn focus_controller(&mut self) {
        log::info!("focus controller");
    }
    fn remove_from_tab_order(&mut self, target: FocusTarget) {
        log::debug!("tabindex=-1 on {target:?}");
    }
    fn item_committed(&mut self, item: &MenuItem<usize>) {
        let source = self.labels.get(*item.handle()).map(String::as_str);
        log::info!("chose {:?} (source child {:?})", item.label(), source);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let source = MenuNode::menu(vec![
        MenuNode::item("Apple"),
        MenuNode::item("Banana"),
        MenuNode::separator(),
        MenuNode::item("Apricot"),
        MenuNode::item("Cherry"),
    ]);
    let host = ConsoleHost {
        anchor: OffsetChain::new(
            vec![
                OffsetBox {
                    offset: Vec2 { x: 24.0, y: 12.0 },
                    ..Default::default()
                },
                OffsetBox {
                    offset: Vec2 { x: 0.0, y: 200.0 },
                    scroll: Vec2 { x: 0.0, y: 40.0 },
                    client: Vec2 { x: 1.0, y: 1.0 },
                },
            ],
            Size {
                width: 120.0,
                height: 28.0,
            },
        ),
        labels: source.children.iter().map(|c| c.text.clone()).collect(),
    };

    let clock = Arc::new(ManualClock::default());
    let mut menu = PopupMenu::with_config(
        &source,
        host,
        ControllerState::new(),
        MenuConfig::default(),
        clock.clone(),
    )
    .context("building the fruit menu")?;

    let apple = menu.registry().index_of(&0)?;
    let banana = menu.registry().index_of(&1)?;

    // keyboard: open, move, typeahead, choose
    menu.on_controller_key(Key::ArrowDown);
    menu.on_item_focus(apple);
    menu.on_item_blur(apple);
    let down = Key::from_key_code(40).context("arrow down keycode")?;
    menu.on_item_key(apple, down);
    menu.on_item_focus(banana);
    menu.on_item_key(banana, Key::Character('c'));
    let cherry = menu.registry().index_of(&4)?;
    menu.on_item_blur(banana);
    menu.on_item_focus(cherry);

    clock.advance(Duration::from_millis(300));
    let fired = menu.poll_timers();
    log::info!("{fired} deferred close(s) fired, open={}", menu.is_open());

    menu.on_item_key(cherry, Key::Enter);
    menu.on_item_blur(cherry);

    // pointer: hover in, wander off, let the delay expire
    menu.on_controller_hover_enter();
    menu.on_controller_hover_leave();
    while let Some(deadline) = menu.next_deadline() {
        clock.set(deadline);
        menu.poll_timers();
    }
    log::info!("final state: {:?}", menu.state());
    Ok(())
}
