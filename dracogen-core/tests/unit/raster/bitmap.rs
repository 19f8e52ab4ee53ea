use super::*;

#[test]
fn channel_order_swaps_red_and_blue() {
    assert_eq!(ChannelOrder::Bgra.encode([1, 2, 3, 4]), [3, 2, 1, 4]);
    assert_eq!(ChannelOrder::Bgra.decode([3, 2, 1, 4]), [1, 2, 3, 4]);
    assert_eq!(ChannelOrder::Rgba.encode([1, 2, 3, 4]), [1, 2, 3, 4]);
}

#[test]
fn clear_writes_in_storage_order() {
    let mut bgra = Bitmap::new(2, 2, ChannelOrder::Bgra);
    bgra.clear(Rgba::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(&bgra.data()[0..4], &[0, 0, 255, 255]);
    assert_eq!(bgra.pixel(1, 1), Some([255, 0, 0, 255]));
    assert_eq!(bgra.pixel(2, 0), None);
    assert_eq!(bgra.pixel(-1, 0), None);
}

#[test]
fn storage_too_small_is_rejected() {
    let buf = vec![0u8; 15];
    assert!(Bitmap::from_storage(buf.as_slice(), 2, 2, ChannelOrder::Rgba).is_err());
    let buf = vec![0u8; 16];
    assert!(Bitmap::from_storage(buf.as_slice(), 2, 2, ChannelOrder::Rgba).is_ok());
    assert!(Bitmap::with_stride(buf.as_slice(), 2, 2, 4, ChannelOrder::Rgba).is_err());
}

#[test]
fn draw_bitmap_scales_converts_and_clips() {
    let mut src = Bitmap::new(2, 1, ChannelOrder::Rgba);
    src.put_pixel(0, 0, [255, 0, 0, 255]);
    src.put_pixel(1, 0, [0, 0, 255, 255]);

    let mut dst = Bitmap::new(5, 3, ChannelOrder::Bgra);
    dst.clear(Rgba::new(0.0, 1.0, 0.0, 1.0));
    dst.draw_bitmap(&src, 1, 1, 2);

    assert_eq!(dst.pixel(0, 1), Some([0, 255, 0, 255]));
    assert_eq!(dst.pixel(1, 1), Some([255, 0, 0, 255]));
    assert_eq!(dst.pixel(2, 2), Some([255, 0, 0, 255]));
    assert_eq!(dst.pixel(3, 1), Some([0, 0, 255, 255]));
    assert_eq!(dst.pixel(4, 2), Some([0, 0, 255, 255]));
    assert_eq!(dst.pixel(1, 0), Some([0, 255, 0, 255]));

    // fully off-screen and negative offsets are clipped
    dst.draw_bitmap(&src, -3, 0, 2);
    assert_eq!(dst.pixel(0, 0), Some([0, 0, 255, 255]));
    dst.draw_bitmap(&src, 10, 10, 1);
}

#[test]
fn transparent_source_pixels_leave_destination() {
    let src = Bitmap::new(1, 1, ChannelOrder::Rgba);
    let mut dst = Bitmap::new(1, 1, ChannelOrder::Rgba);
    dst.clear(Rgba::WHITE);
    dst.draw_bitmap(&src, 0, 0, 1);
    assert_eq!(dst.pixel(0, 0), Some([255, 255, 255, 255]));
}

#[test]
fn frame_is_flipped_and_unpremultiplied() {
    let mut bmp = Bitmap::new(1, 2, ChannelOrder::Bgra);
    bmp.put_pixel(0, 0, [64, 0, 0, 128]);
    bmp.put_pixel(0, 1, [0, 0, 255, 255]);
    let frame = bmp.to_frame();
    assert_eq!((frame.width, frame.height), (1, 2));
    assert_eq!(frame.data, vec![0, 0, 255, 255, 128, 0, 0, 128]);
}

#[test]
fn sub_view_shares_parent_stride() {
    let mut bmp = Bitmap::new(4, 4, ChannelOrder::Rgba);
    {
        let mut view = bmp.sub_view_mut(1, 2, 2, 2).unwrap();
        assert_eq!(view.stride(), 16);
        view.clear(Rgba::WHITE);
        assert_eq!(view.pixel(2, 0), None);
    }
    assert_eq!(bmp.pixel(0, 2), Some([0, 0, 0, 0]));
    assert_eq!(bmp.pixel(1, 2), Some([255, 255, 255, 255]));
    assert_eq!(bmp.pixel(2, 3), Some([255, 255, 255, 255]));
    assert_eq!(bmp.pixel(3, 3), Some([0, 0, 0, 0]));
    assert_eq!(bmp.pixel(1, 1), Some([0, 0, 0, 0]));
    assert!(bmp.sub_view_mut(3, 3, 2, 1).is_err());
}

#[test]
fn arena_block_backs_a_bitmap() {
    use crate::foundation::arena::Arena;

    let mut arena = Arena::with_capacity(64);
    let block = arena.push_size(2 * 2 * BYTES_PER_PIXEL);
    let mut bmp = Bitmap::from_storage(arena.bytes_mut(block), 2, 2, ChannelOrder::Rgba).unwrap();
    bmp.clear(Rgba::BLACK);
    assert_eq!(bmp.pixel(1, 1), Some([0, 0, 0, 255]));
    assert_eq!(arena.bytes(block)[3], 255);
}
