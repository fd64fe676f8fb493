use fltk::{
    app::{self, Sender},
    enums::{Align, CallbackTrigger, Color, Event, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::domain::messages::Message;

pub const STATUS_READY: &str = "Ready";

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub status_bar: Frame,
}

pub fn build_main_window(app_name: &str, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::default().with_size(800, 600).center_screen();
    wind.set_label(&format!("untitled - {}", app_name));
    wind.set_xclass("ClassicPad");
    wind.size_range(800, 600, 0, 0);

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    text_editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));

    // Only user edits fire this; programmatic set_text does not.
    text_editor.set_trigger(CallbackTrigger::Changed);
    text_editor.set_callback({
        let s = *sender;
        move |_| s.send(Message::ContentChanged)
    });

    let mut status_bar = Frame::default().with_label(STATUS_READY);
    status_bar.set_frame(FrameType::FlatBox);
    status_bar.set_label_size(12);
    status_bar.set_align(Align::Left | Align::Inside);
    flex.fixed(&status_bar, 22);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Closing the window goes through the same confirmation as File/Exit.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        menu,
        text_editor,
        status_bar,
    }
}
