use crate::components::language_switcher::LanguageSwitcher;
use crate::config;
use crate::i18n::provider::use_messages;
use crate::motion::keyframes::{Keyframes, MotionError, Percent};
use crate::motion::scroll::use_scroll_progress;
use std::rc::Rc;
use yew::prelude::*;

struct CollageTile {
    class: &'static str,
    image: &'static str,
    alt_key: &'static str,
    // Offset the tile starts from, as a percentage of its own box
    from_x: f64,
    from_y: f64,
}

const COLLAGE: [CollageTile; 6] = [
    CollageTile {
        class: "tile wide",
        image: "wild-bird-2.webp",
        alt_key: "collage.wildBird",
        from_x: -35.0,
        from_y: -35.0,
    },
    CollageTile {
        class: "tile tall",
        image: "closeup-fruit-dove-ptilinopus.webp",
        alt_key: "collage.fruitDove",
        from_x: 30.0,
        from_y: -30.0,
    },
    CollageTile {
        class: "tile tall",
        image: "red-bellied-woodpecker.webp",
        alt_key: "collage.woodpecker",
        from_x: -25.0,
        from_y: 25.0,
    },
    CollageTile {
        class: "tile",
        image: "red-scarlet-macaw.webp",
        alt_key: "collage.macaw",
        from_x: 25.0,
        from_y: -145.0,
    },
    CollageTile {
        class: "tile",
        image: "great-hornbill.webp",
        alt_key: "collage.hornbill",
        from_x: -25.0,
        from_y: 25.0,
    },
    CollageTile {
        class: "tile",
        image: "halcyon-cyanoventrisbird.webp",
        alt_key: "collage.kingfisher",
        from_x: 25.0,
        from_y: 25.0,
    },
];

/// Breakpoint tables for everything in the hero that follows the scroll.
pub struct HeroMotion {
    copy_scale: Keyframes<f64>,
    copy_opacity: Keyframes<f64>,
    copy_y: Keyframes<Percent>,
    tile_scale: Keyframes<f64>,
    tile_offsets: Vec<(Keyframes<Percent>, Keyframes<Percent>)>,
}

impl HeroMotion {
    pub fn new() -> Result<Self, MotionError> {
        let tile_offsets = COLLAGE
            .iter()
            .map(|tile| -> Result<_, MotionError> {
                Ok((
                    Keyframes::linear((0.0, 1.0), (Percent(tile.from_x), Percent(0.0)))?,
                    Keyframes::linear((0.0, 1.0), (Percent(tile.from_y), Percent(0.0)))?,
                ))
            })
            .collect::<Result<Vec<_>, MotionError>>()?;

        Ok(Self {
            copy_scale: Keyframes::linear((0.0, 0.75), (1.0, 0.5))?,
            copy_opacity: Keyframes::linear((0.0, 0.75), (1.0, 0.0))?,
            copy_y: Keyframes::linear((0.0, 0.75), (Percent(0.0), Percent(7.5)))?,
            tile_scale: Keyframes::linear((0.0, 1.0), (0.5, 1.0))?,
            tile_offsets,
        })
    }

    pub fn copy_style(&self, progress: f64) -> String {
        format!(
            "transform: translateY({}) scale({}); opacity: {};",
            self.copy_y.sample(progress),
            self.copy_scale.sample(progress),
            self.copy_opacity.sample(progress),
        )
    }

    pub fn tile_transform(&self, index: usize, progress: f64) -> String {
        let scale = self.tile_scale.sample(progress);
        match self.tile_offsets.get(index) {
            Some((x, y)) => format!(
                "translate({}, {}) scale({})",
                x.sample(progress),
                y.sample(progress),
                scale
            ),
            None => format!("scale({})", scale),
        }
    }
}

/// The nav turns solid only once the collage has fully assembled.
pub fn nav_background(progress: f64) -> &'static str {
    if progress >= 1.0 {
        config::NAV_SOLID_BACKGROUND
    } else {
        "transparent"
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageGridHeroProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ImageGridHero)]
pub fn image_grid_hero(props: &ImageGridHeroProps) -> Html {
    let target_ref = use_node_ref();
    let progress = use_scroll_progress(target_ref.clone());
    // Without valid tables the hero stays in its resting layout.
    let motion = use_memo(
        |_| match HeroMotion::new() {
            Ok(motion) => Some(Rc::new(motion)),
            Err(e) => {
                log::error!("hero motion disabled: {}", e);
                None
            }
        },
        (),
    );
    let motion = (*motion).clone();

    html! {
        <>
            <Nav progress={progress} />
            <section
                ref={target_ref}
                class="image-grid-hero"
                style={format!("height: {}vh;", config::HERO_SCROLL_VH)}
            >
                <div class="image-grid-sticky">
                    <HeroCopy progress={progress} motion={motion.clone()} />
                    <Images progress={progress} motion={motion} />
                </div>
            </section>
            { for props.children.iter() }
            <style>
                {r#"
                    .image-grid-hero {
                        position: relative;
                        background: #0f172a;
                    }
                    .image-grid-sticky {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        z-index: 0;
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        grid-template-rows: repeat(3, minmax(0, 1fr));
                        gap: 1rem;
                        padding: 1rem;
                        overflow: hidden;
                        box-sizing: border-box;
                    }
                    .hero-copy {
                        position: absolute;
                        inset: 0;
                        z-index: 20;
                        padding: 0 2rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        will-change: transform, opacity;
                    }
                    .hero-copy h1 {
                        color: #fff;
                        font-size: 4.5rem;
                        font-weight: 700;
                        text-align: center;
                        max-width: 36rem;
                        margin: 0;
                    }
                    .hero-copy h1 span {
                        display: block;
                        color: #86efac;
                    }
                    .hero-copy p {
                        color: #d1d5db;
                        text-align: center;
                        max-width: 36rem;
                        margin: 1.5rem 0;
                    }
                    .tile {
                        position: relative;
                        z-index: 10;
                        background-size: cover;
                        background-position: center;
                        will-change: transform;
                    }
                    .tile.wide {
                        grid-column: span 2;
                    }
                    .tile.tall {
                        grid-row: span 2;
                    }
                    .hero-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.5rem 1rem;
                        transition: background-color 0.3s;
                    }
                    .hero-nav-brand {
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 700;
                    }
                    @media (max-width: 768px) {
                        .hero-copy h1 {
                            font-size: 3rem;
                        }
                        .hero-copy p {
                            font-size: 0.875rem;
                        }
                    }
                "#}
            </style>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct NavProps {
    progress: f64,
}

#[function_component(Nav)]
fn nav(props: &NavProps) -> Html {
    let messages = use_messages();

    html! {
        <nav class="hero-nav" style={format!("background: {};", nav_background(props.progress))}>
            <span class="hero-nav-brand">{ messages.translate("nav.brand") }</span>
            <LanguageSwitcher />
        </nav>
    }
}

#[derive(Properties)]
struct MotionProps {
    progress: f64,
    motion: Option<Rc<HeroMotion>>,
}

impl PartialEq for MotionProps {
    fn eq(&self, other: &Self) -> bool {
        self.progress == other.progress
            && self.motion.as_ref().map(Rc::as_ptr) == other.motion.as_ref().map(Rc::as_ptr)
    }
}

impl MotionProps {
    fn copy_style(&self) -> String {
        self.motion
            .as_ref()
            .map(|motion| motion.copy_style(self.progress))
            .unwrap_or_default()
    }

    fn tile_transform(&self, index: usize) -> String {
        self.motion
            .as_ref()
            .map(|motion| motion.tile_transform(index, self.progress))
            .unwrap_or_else(|| "none".to_string())
    }
}

#[function_component(HeroCopy)]
fn hero_copy(props: &MotionProps) -> Html {
    let messages = use_messages();

    html! {
        <div class="hero-copy" style={props.copy_style()}>
            <h1>
                { messages.translate("hero.title") }
                <span>{ messages.translate("hero.subtitle") }</span>
            </h1>
            <p>{ messages.translate("hero.description") }</p>
        </div>
    }
}

#[function_component(Images)]
fn images(props: &MotionProps) -> Html {
    let messages = use_messages();

    html! {
        <>
            { for COLLAGE.iter().enumerate().map(|(index, tile)| html! {
                <div
                    class={tile.class}
                    role="img"
                    aria-label={messages.translate(tile.alt_key)}
                    style={format!(
                        "background-image: url('{}'); transform: {};",
                        config::asset_url(tile.image),
                        props.tile_transform(index),
                    )}
                />
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collage_starts_scattered_and_half_size() {
        let motion = HeroMotion::new().unwrap();
        assert_eq!(motion.tile_transform(0, 0.0), "translate(-35%, -35%) scale(0.5)");
        assert_eq!(motion.tile_transform(3, 0.0), "translate(25%, -145%) scale(0.5)");
    }

    #[test]
    fn collage_assembles_at_full_progress() {
        let motion = HeroMotion::new().unwrap();
        for index in 0..COLLAGE.len() {
            assert_eq!(motion.tile_transform(index, 1.0), "translate(0%, 0%) scale(1)");
        }
    }

    #[test]
    fn copy_fades_out_by_three_quarters() {
        let motion = HeroMotion::new().unwrap();
        assert_eq!(motion.copy_style(0.0), "transform: translateY(0%) scale(1); opacity: 1;");
        assert_eq!(motion.copy_style(0.75), "transform: translateY(7.5%) scale(0.5); opacity: 0;");
        assert_eq!(motion.copy_style(1.0), motion.copy_style(0.75));
    }

    #[test]
    fn nav_is_solid_only_at_the_end() {
        assert_eq!(nav_background(0.0), "transparent");
        assert_eq!(nav_background(0.999), "transparent");
        assert_eq!(nav_background(1.0), "rgb(13,10,9)");
    }

    #[test]
    fn hero_without_motion_tables_stays_at_rest() {
        let props = MotionProps { progress: 0.5, motion: None };
        assert_eq!(props.copy_style(), "");
        assert_eq!(props.tile_transform(0), "none");

        let props = MotionProps { progress: 0.0, motion: Some(Rc::new(HeroMotion::new().unwrap())) };
        assert_eq!(props.tile_transform(0), "translate(-35%, -35%) scale(0.5)");
    }
}
