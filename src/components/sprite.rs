use bevy_ecs::prelude::Component;

/// Sprite drawn from a texture in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore).
///
/// `width`/`height` are the on-screen size. Which part of the texture is
/// sampled comes from the entity's
/// [`SpriteAnimation`](crate::components::animation::SpriteAnimation).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }
}
