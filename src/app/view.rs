// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The view is a single surface: the sampled view rectangle of the adapted
//! canvas, stretched to the window. Sampling happens in `App::update`; the
//! view only presents the cached frame.

use super::{App, Message};
use iced::widget::{center, Image, Text};
use iced::{ContentFit, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        match &self.frame {
            Some(handle) => Image::new(handle.clone())
                .content_fit(ContentFit::Fill)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => {
                let message = self.status.clone().unwrap_or_else(|| {
                    String::from("No image loaded. Pass an image file or directory on the command line.")
                });
                center(Text::new(message)).into()
            }
        }
    }
}
