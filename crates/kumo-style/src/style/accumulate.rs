//! Folding classified utilities into a [`ParsedStyle`].
//!
//! Dimensions never interact. Within one dimension the later utility
//! overwrites the earlier one, so `bg-kumo-a bg-kumo-b` binds `b`.

use super::{BorderStyle, ParsedStyle, VariableRef};
use crate::classify::{
    BorderToken, ColorChannel, ColorToken, SizeProperty, TypographyToken, Utility,
};
use crate::tables::ColorLiteral;

impl ParsedStyle {
    /// Fold utilities left to right into a fresh style.
    pub fn from_utilities<'a, I>(utilities: I) -> Self
    where
        I: IntoIterator<Item = &'a Utility>,
    {
        utilities
            .into_iter()
            .fold(Self::default(), |mut style, utility| {
                style.apply(utility);
                style
            })
    }

    /// Apply one utility, replacing whatever its dimension held before.
    pub fn apply(&mut self, utility: &Utility) {
        match utility {
            Utility::Size(property, px) => self.apply_size(*property, *px),
            Utility::Color(channel, token) => self.apply_color(*channel, token),
            Utility::Border(token) => self.apply_border(token),
            Utility::Typography(TypographyToken::FontSize(px)) => self.font_size = Some(*px),
            Utility::Typography(TypographyToken::FontWeight(weight)) => {
                self.font_weight = Some(*weight)
            }
            Utility::Unknown { .. } => {}
        }
    }

    fn apply_size(&mut self, property: SizeProperty, px: f32) {
        match property {
            SizeProperty::Height => self.height = Some(px),
            SizeProperty::Width => self.width = Some(px),
            SizeProperty::Size => {
                self.width = Some(px);
                self.height = Some(px);
            }
            SizeProperty::MinWidth => self.min_width = Some(px),
            SizeProperty::Padding => {
                self.padding_x = Some(px);
                self.padding_y = Some(px);
            }
            SizeProperty::PaddingX => self.padding_x = Some(px),
            SizeProperty::PaddingY => self.padding_y = Some(px),
            SizeProperty::Gap => self.gap = Some(px),
            SizeProperty::BorderRadius => self.border_radius = Some(px),
        }
    }

    fn apply_color(&mut self, channel: ColorChannel, token: &ColorToken) {
        match (channel, token) {
            (ColorChannel::Fill, ColorToken::Variable(name)) => {
                self.fill_variable = Some(VariableRef::Named(name.clone()));
            }
            (ColorChannel::Fill, ColorToken::Literal(ColorLiteral::Transparent)) => {
                self.fill_variable = Some(VariableRef::Literal);
            }
            (ColorChannel::Text, ColorToken::Variable(name)) => {
                self.text_variable = Some(VariableRef::Named(name.clone()));
                self.is_white_text = None;
            }
            (ColorChannel::Text, ColorToken::Literal(ColorLiteral::White)) => {
                self.text_variable = Some(VariableRef::Literal);
                self.is_white_text = Some(true);
            }
            (ColorChannel::Stroke, ColorToken::Variable(name)) => {
                self.stroke_variable = Some(name.clone());
            }
            (_, ColorToken::Literal(literal)) => {
                tracing::trace!(
                    target: crate::targets::PARSER,
                    ?channel,
                    ?literal,
                    "literal has no meaning for this channel"
                );
            }
        }
    }

    fn apply_border(&mut self, token: &BorderToken) {
        match token {
            BorderToken::Width(px) => {
                self.has_border = Some(true);
                self.stroke_weight = Some(*px);
            }
            BorderToken::None => {
                self.has_border = Some(false);
                self.stroke_weight = None;
            }
            BorderToken::NoRing => {}
            BorderToken::Dashed(pattern) => {
                self.border_style = Some(BorderStyle::Dashed);
                self.dash_pattern = Some(pattern.clone());
            }
            BorderToken::Solid => {
                self.border_style = None;
                self.dash_pattern = None;
            }
        }
    }
}
