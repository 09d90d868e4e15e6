//! Window chrome geometry used for hit testing

/// Frame style constants shared with the host stylesheet
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
    pub resize_handle_size: f32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 28.0,
    button_size: 20.0,
    button_spacing: 4.0,
    button_margin: 6.0,
    resize_handle_size: 16.0,
};
