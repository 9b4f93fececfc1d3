use fltk::{
    app::Sender,
    button::{Button, ReturnButton},
    enums::{Align, Color, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    menu::MenuBar,
    output::Output,
    prelude::*,
    window::Window,
};

use crate::app::domain::Message;

pub const ROW_HEIGHT: i32 = 40;
pub const TOAST_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub theme_button: Button,
    pub toast_frame: Frame,
    pub prompt: Frame,
    pub url_input: Input,
    pub shorten_button: ReturnButton,
    pub result_row: Flex,
    pub short_url_output: Output,
    pub copy_button: Button,
    pub reset_button: Button,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 600, 320, "\u{1f517} FerrisLink");
    wind.set_xclass("FerrisLink");

    let mut flex = Flex::new(0, 0, 600, 320, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(10);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Header: theme toggle on the right
    let mut header = Flex::default();
    header.set_type(FlexType::Row);
    header.set_margins(20, 0, 20, 0);
    Frame::default();
    let mut theme_button = Button::default();
    theme_button.set_frame(FrameType::FlatBox);
    theme_button.set_label_size(20);
    header.fixed(&theme_button, 40);
    header.end();
    flex.fixed(&header, 30);

    // Notification toast (initially hidden)
    let mut toast_frame = Frame::default().with_size(0, 0);
    toast_frame.set_frame(FrameType::FlatBox);
    toast_frame.set_label_size(13);
    toast_frame.hide();
    flex.fixed(&toast_frame, 0);

    let mut prompt = Frame::default().with_label("Enter URL to shorten");
    prompt.set_align(Align::Left | Align::Inside);
    prompt.set_label_size(15);
    flex.fixed(&prompt, 25);

    let mut input_row = Flex::default();
    input_row.set_type(FlexType::Row);
    input_row.set_margins(20, 0, 20, 0);
    let mut url_input = Input::default();
    url_input.set_text_size(15);
    let mut shorten_button = ReturnButton::default().with_label("Shorten");
    shorten_button.set_color(Color::from_rgb(79, 70, 229));
    shorten_button.set_label_color(Color::from_rgb(229, 231, 235));
    input_row.fixed(&shorten_button, 110);
    input_row.end();
    flex.fixed(&input_row, ROW_HEIGHT);

    // Result row (hidden until a short url exists)
    let mut result_row = Flex::default();
    result_row.set_type(FlexType::Row);
    result_row.set_margins(20, 0, 20, 0);
    result_row.set_spacing(6);
    let mut short_url_output = Output::default();
    short_url_output.set_text_size(15);
    let mut copy_button = Button::default().with_label("Copy");
    copy_button.set_tooltip("copy url");
    result_row.fixed(&copy_button, 70);
    let mut reset_button = Button::default().with_label("Reset");
    reset_button.set_tooltip("reset");
    result_row.fixed(&reset_button, 70);
    result_row.end();
    result_row.hide();
    flex.fixed(&result_row, 0);

    // Filler
    Frame::default();

    flex.end();
    wind.end();
    wind.resizable(&flex);
    wind.size_range(420, 260, 0, 0);

    // Wiring
    theme_button.set_callback({ let s = *sender; move |_| s.send(Message::ToggleDarkMode) });
    shorten_button.set_callback({ let s = *sender; move |_| s.send(Message::Submit) });
    copy_button.set_callback({ let s = *sender; move |_| s.send(Message::CopyUrl) });
    reset_button.set_callback({ let s = *sender; move |_| s.send(Message::Reset) });
    url_input.set_trigger(fltk::enums::CallbackTrigger::Changed);
    url_input.set_callback({ let s = *sender; move |i| s.send(Message::InputChanged(i.value())) });

    // Escape would close the window by default; only the close button quits.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if fltk::app::event() == Event::Close {
                s.send(Message::Quit);
            }
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        theme_button,
        toast_frame,
        prompt,
        url_input,
        shorten_button,
        result_row,
        short_url_output,
        copy_button,
        reset_button,
    }
}
