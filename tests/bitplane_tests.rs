use bitplane_hide::bitplane::{
    BitDepth, embed, embed_channel, embed_channels, extract, extract_channel,
};
use bitplane_hide::error::{Error, ErrorKind, InputError};
use image::{ImageBuffer, Rgb, RgbImage};
use rand::RngCore;

const DEPTHS: [BitDepth; 2] = [BitDepth::THREE, BitDepth::FOUR];

/// 生成一幅随机像素的 RGB 图像
fn random_image(width: u32, height: u32) -> RgbImage {
    let mut raw = vec![0u8; (width * height * 3) as usize];
    rand::rng().fill_bytes(&mut raw);
    ImageBuffer::from_raw(width, height, raw).expect("buffer size matches dimensions")
}

#[test]
fn test_worked_example_four_bits() {
    let embedded = embed_channel(0b1101_0110, 0b1011_0000, BitDepth::FOUR);
    assert_eq!(embedded, 219);
    assert_eq!(embedded, 0b1101_1011);
    assert_eq!(extract_channel(embedded, BitDepth::FOUR), 176);
}

#[test]
fn test_bit_depth_masks() {
    assert_eq!(BitDepth::THREE.payload_mask(), 0b0000_0111);
    assert_eq!(BitDepth::THREE.carrier_mask(), 0b1111_1000);
    assert_eq!(BitDepth::FOUR.payload_mask(), 0b0000_1111);
    assert_eq!(BitDepth::FOUR.carrier_mask(), 0b1111_0000);
    assert_eq!(BitDepth::THREE.secret_mask(), 0b1110_0000);
    assert_eq!(BitDepth::FOUR.secret_mask(), 0b1111_0000);
    assert_eq!(BitDepth::THREE.shift(), 5);
    assert_eq!(BitDepth::default(), BitDepth::FOUR);
}

#[test]
fn test_bit_depth_rejects_unsupported_values() {
    assert_eq!(BitDepth::try_from(3).map(BitDepth::get).ok(), Some(3));
    assert_eq!(BitDepth::try_from(4).map(BitDepth::get).ok(), Some(4));

    for value in [0u8, 1, 2, 5, 8, 255] {
        let result = BitDepth::try_from(value);
        assert!(
            matches!(result, Err(InputError::UnsupportedBitDepth(v)) if v == value),
            "bit depth {value} should be rejected"
        );
    }
}

/// 对所有通道值组合验证：载体高位不变，提取结果等于秘密的高位且低位为 0
#[test]
fn test_channel_properties_exhaustive() {
    for bits in DEPTHS {
        for c in 0..=255u8 {
            for s in 0..=255u8 {
                let embedded = embed_channel(c, s, bits);
                assert_eq!(embedded & bits.carrier_mask(), c & bits.carrier_mask());

                let recovered = extract_channel(embedded, bits);
                assert_eq!(recovered, s & bits.secret_mask());
                assert_eq!(recovered & !bits.secret_mask(), 0);
            }
        }
    }
}

#[test]
fn test_boundary_values() {
    for bits in DEPTHS {
        assert_eq!(embed_channel(0, 0, bits), 0);
        assert_eq!(embed_channel(255, 255, bits), 255);
        assert_eq!(embed_channel(255, 0, bits), bits.carrier_mask());
        assert_eq!(embed_channel(0, 255, bits), bits.payload_mask());

        assert_eq!(extract_channel(0, bits), 0);
        assert_eq!(extract_channel(255, bits), bits.secret_mask());
    }
    assert_eq!(extract_channel(255, BitDepth::THREE), 224);
    assert_eq!(extract_channel(255, BitDepth::FOUR), 240);
}

#[test]
fn test_image_round_trip_recovers_top_bits() -> anyhow::Result<()> {
    let carrier = random_image(37, 23);
    let secret = random_image(37, 23);

    for bits in DEPTHS {
        let stego = embed(&carrier, &secret, bits)?;
        assert_eq!(stego.dimensions(), carrier.dimensions());

        let recovered = extract(&stego, bits)?;
        assert_eq!(recovered.dimensions(), secret.dimensions());

        for ((s, r), (c, e)) in secret
            .as_raw()
            .iter()
            .zip(recovered.as_raw())
            .zip(carrier.as_raw().iter().zip(stego.as_raw()))
        {
            assert_eq!(*r, s & bits.secret_mask());
            assert_eq!(e & bits.carrier_mask(), c & bits.carrier_mask());
        }
    }
    Ok(())
}

#[test]
fn test_embed_is_idempotent() -> anyhow::Result<()> {
    let carrier = random_image(16, 16);
    let secret = random_image(16, 16);

    for bits in DEPTHS {
        let once = embed(&carrier, &secret, bits)?;
        let twice = embed(&once, &secret, bits)?;
        assert_eq!(once, twice);
    }
    Ok(())
}

#[test]
fn test_embed_does_not_touch_inputs() -> anyhow::Result<()> {
    let carrier = RgbImage::from_pixel(4, 4, Rgb([214, 214, 214]));
    let secret = RgbImage::from_pixel(4, 4, Rgb([176, 176, 176]));

    let stego = embed(&carrier, &secret, BitDepth::FOUR)?;

    assert!(stego.pixels().all(|p| *p == Rgb([219, 219, 219])));
    assert!(carrier.pixels().all(|p| *p == Rgb([214, 214, 214])));
    assert!(secret.pixels().all(|p| *p == Rgb([176, 176, 176])));
    Ok(())
}

#[test]
fn test_dimension_mismatch_is_input_error() {
    let carrier = random_image(10, 10);
    let secret = random_image(10, 9);

    let err = embed(&carrier, &secret, BitDepth::FOUR).expect_err("mismatch must fail");
    assert_eq!(err.kind(), ErrorKind::Input);
    assert!(matches!(
        err,
        Error::Input(InputError::DimensionMismatch {
            carrier: (10, 10),
            secret: (10, 9),
        })
    ));
}

#[test]
fn test_channel_length_mismatch_is_not_truncated() {
    let err = embed_channels(&[1, 2, 3], &[1, 2], BitDepth::THREE).expect_err("must fail");
    assert!(matches!(
        err,
        Error::Input(InputError::LengthMismatch {
            carrier: 3,
            secret: 2
        })
    ));
}
