use crate::colour::Colour;
use crate::frame::ColourFrame;

/// Something that can put colours on a keyboard.
///
/// `write_custom_frame` receives the [`FRAME_LEN`](crate::FRAME_LEN) bytes of
/// an encoded frame and must have them fully accepted before switching the
/// keyboard over to the custom effect.
pub trait MatrixSink {
    type Error: std::error::Error;

    /// Set every key to one colour with the hardware static effect
    fn write_static_colour(&self, colour: Colour) -> Result<(), Self::Error>;

    fn write_custom_frame(&self, frame: &[u8]) -> Result<(), Self::Error>;

    fn show(&self, frame: &ColourFrame<'_>) -> Result<(), Self::Error> {
        self.write_custom_frame(&frame.to_bytes())
    }
}
