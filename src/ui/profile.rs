// SPDX-License-Identifier: MPL-2.0
//! About section body: headshot and short bio.

use crate::content::Profile;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section;
use iced::widget::image::Image;
use iced::widget::{Column, Row, Text};
use iced::{alignment::Vertical, ContentFit, Element, Length};

pub fn view<'a, Message: 'a>(profile: &'a Profile) -> Element<'a, Message> {
    let avatar = Image::new(profile.headshot.handle.clone())
        .width(Length::Fixed(sizing::AVATAR))
        .height(Length::Fixed(sizing::AVATAR))
        .content_fit(ContentFit::Cover);

    let intro = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(profile.name).size(typography::TITLE_LG))
        .push(section::muted_text(
            profile.bio.to_string(),
            typography::SIZE_MD,
        ));

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(avatar)
        .push(intro)
        .into()
}
