pub const DEFAULT_WIDTH: i32 = 1280;          // Initial window width
pub const DEFAULT_HEIGHT: i32 = 720;          // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const MARGIN: f32 = 48.0;                 // Outer padding around every region
pub const BUTTON_WIDTH: f32 = 140.0;
pub const BUTTON_HEIGHT: f32 = 44.0;
pub const BUTTON_SPACING: f32 = 20.0;         // Gap between content, buttons and progress track
pub const PROGRESS_HEIGHT: f32 = 8.0;
pub const BULLET_INDENT: f32 = 28.0;          // Text offset to the right of a bullet dot
pub const BULLET_RADIUS: f32 = 5.0;

pub const TITLE_FONT_SIZE: i32 = 48;
pub const BODY_FONT_SIZE: i32 = 26;
pub const BULLET_FONT_SIZE: i32 = 24;
pub const BUTTON_FONT_SIZE: i32 = 22;
pub const COUNTER_FONT_SIZE: i32 = 22;
pub const LINE_SPACING: f32 = 1.3;            // Line height as a multiple of font size
pub const SECTION_GAP: f32 = 24.0;            // Vertical gap between title, paragraph and list

pub const OUTLINE_BAR_WIDTH: usize = 20;      // Characters in the --outline progress bar
