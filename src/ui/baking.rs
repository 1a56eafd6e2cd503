// SPDX-License-Identifier: MPL-2.0
//! Baking section body: showcase image beside the blurb.

use crate::content::Baking;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section;
use iced::widget::image::Image;
use iced::widget::Row;
use iced::{ContentFit, Element, Length};

pub fn view<'a, Message: 'a>(baking: &'a Baking) -> Element<'a, Message> {
    let showcase = Image::new(baking.bitmap.handle.clone())
        .width(Length::Fixed(sizing::BAKING_IMAGE))
        .content_fit(ContentFit::Cover);

    Row::new()
        .spacing(spacing::MD)
        .push(showcase)
        .push(section::muted_text(
            baking.blurb.to_string(),
            typography::SIZE_MD,
        ))
        .into()
}
