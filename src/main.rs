use fltk::{app, prelude::*};

use classic_pad::app::domain::{Message, ShellSettings};
use classic_pad::app::state::AppState;
use classic_pad::ui::main_window::build_main_window;
use classic_pad::ui::menu::build_menu;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = ShellSettings::load();
    let app = app::App::default();
    let (s, r) = app::channel::<Message>();

    let mut widgets = build_main_window(&settings.app_name, &s);
    build_menu(&mut widgets.menu, &s, &settings.app_name);

    let mut state = AppState::new(&settings, &widgets, s);
    widgets.wind.show();

    let data_file = std::env::args().nth(1);
    state.run(data_file.as_deref());

    while app.wait() {
        if let Some(msg) = r.recv() {
            if state.handle(msg) {
                break;
            }
        }
    }
    log::info!("{} closed", settings.app_name);
}
