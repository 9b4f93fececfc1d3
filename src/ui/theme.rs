use fltk::{enums::Color, prelude::*};

use crate::app::domain::ThemeMode;
use super::main_window::MainWidgets;

const SUN: &str = "\u{2600}";
const MOON: &str = "\u{263e}";

pub fn apply_theme(widgets: &mut MainWidgets, mode: ThemeMode) {
    let is_dark = mode.is_dark();

    let (background, text, field, border) = if is_dark {
        // gray-900 / gray-300 / gray-800 / gray-700
        (
            Color::from_rgb(17, 24, 39),
            Color::from_rgb(209, 213, 219),
            Color::from_rgb(31, 41, 55),
            Color::from_rgb(55, 65, 81),
        )
    } else {
        // gray-100 / gray-900 / white / gray-300
        (
            Color::from_rgb(243, 244, 246),
            Color::from_rgb(17, 24, 39),
            Color::White,
            Color::from_rgb(209, 213, 219),
        )
    };

    widgets.wind.set_color(background);
    widgets.wind.set_label_color(text);
    widgets.flex.set_color(background);

    widgets.menu.set_color(if is_dark { Color::from_rgb(31, 41, 55) } else { Color::from_rgb(229, 231, 235) });
    widgets.menu.set_text_color(text);
    widgets.menu.set_selection_color(border); // Hover color

    // The toggle shows what clicking it switches to
    widgets.theme_button.set_label(if is_dark { SUN } else { MOON });
    widgets.theme_button.set_tooltip(mode.toggle_hint());
    widgets.theme_button.set_color(background);
    widgets.theme_button.set_label_color(text);

    widgets.prompt.set_label_color(text);

    widgets.url_input.set_color(field);
    widgets.url_input.set_text_color(text);
    widgets.url_input.set_cursor_color(text);
    widgets.url_input.set_selection_color(border);

    widgets.short_url_output.set_color(field);
    widgets.short_url_output.set_text_color(text);
    widgets.short_url_output.set_selection_color(border);

    if is_dark {
        widgets.shorten_button.set_color(Color::from_rgb(99, 102, 241)); // indigo-500
    } else {
        widgets.shorten_button.set_color(Color::from_rgb(79, 70, 229)); // indigo-600
    }

    for button in [&mut widgets.copy_button, &mut widgets.reset_button] {
        button.set_color(if is_dark { Color::from_rgb(55, 65, 81) } else { Color::from_rgb(229, 231, 235) });
        button.set_label_color(text);
    }

    widgets.wind.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Attribute 20 on Windows 11 / Windows 10 2004+, 19 on 1809-1903
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute), // DWMWA_USE_IMMERSIVE_DARK_MODE
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
