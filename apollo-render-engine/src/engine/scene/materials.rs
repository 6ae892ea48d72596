use bevy::prelude::*;
use bevy::render::render_resource::Face;

/// `0xRRGGBB` to an sRGB colour.
pub fn hex_colour(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Lit surface with optional glow and metalness.
pub fn shaded(colour: u32, emissive: Option<u32>, metallic: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: hex_colour(colour),
        emissive: emissive.map(hex_colour).unwrap_or(Color::BLACK).into(),
        metallic,
        perceptual_roughness: 0.7,
        ..default()
    }
}

/// Lit, alpha-blended layer (land masses, clouds).
pub fn translucent(colour: u32, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: hex_colour(colour).with_alpha(opacity),
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

/// Unlit, alpha-blended overlay.
pub fn glow(colour: u32, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        unlit: true,
        ..translucent(colour, opacity)
    }
}

/// Unlit shell seen from inside, used for the atmosphere halo.
pub fn back_face_glow(colour: u32, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        cull_mode: Some(Face::Front),
        ..glow(colour, opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_channels_unpack_in_order() {
        let colour = hex_colour(0x4facfe).to_srgba();
        assert_eq!(colour, Srgba::rgb_u8(0x4f, 0xac, 0xfe));
    }
}
