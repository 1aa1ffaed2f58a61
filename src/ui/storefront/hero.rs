// src/ui/storefront/hero.rs - Full-screen hero with build-time content

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::content::HERO;
use crate::ui::router::Route;

/// Hero section. Fully static; no backend dependency.
#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section {
            class: "relative h-screen flex items-center justify-center overflow-hidden bg-black",

            video {
                class: "absolute inset-0 w-full h-full object-cover opacity-60",
                src: HERO.video_url,
                autoplay: true,
                muted: true,
                r#loop: true,
            }

            div {
                class: "relative z-10 text-center text-white px-6",
                h1 {
                    class: "text-6xl lg:text-8xl font-light tracking-[0.2em] mb-6",
                    {HERO.title}
                }
                p {
                    class: "text-xl lg:text-2xl font-light tracking-wide mb-4",
                    {HERO.subtitle}
                }
                p {
                    class: "max-w-2xl mx-auto text-white/80 font-light leading-relaxed mb-10",
                    {HERO.description}
                }
                Link {
                    to: Route::Collections {},
                    class: "inline-block border border-white px-10 py-4 text-sm tracking-[0.2em] uppercase hover:bg-white hover:text-black transition-colors duration-300",
                    {HERO.cta}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_creation() {
        let _hero = rsx! { HeroSection {} };
    }
}
