// src/ui/storefront/about.rs - Static about section and craftsmanship steps

use dioxus::prelude::*;

use crate::content::{ABOUT_LEAD, CRAFT_STEPS};

/// About section. Fully static; no backend dependency.
#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section {
            class: "py-24 bg-white",
            div {
                class: "max-w-7xl mx-auto px-6 lg:px-8",
                div {
                    class: "text-center mb-20",
                    h2 {
                        class: "text-5xl lg:text-6xl font-light tracking-wider text-black mb-6",
                        "Our Story"
                    }
                    div {
                        class: "w-24 h-px bg-black mx-auto mb-8"
                    }
                    p {
                        class: "text-lg text-gray-600 font-light max-w-3xl mx-auto leading-relaxed",
                        {ABOUT_LEAD}
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-12",
                    for (step, title, description) in CRAFT_STEPS {
                        div {
                            key: "{step}",
                            class: "text-center",
                            div {
                                class: "text-6xl font-light text-gray-300 mb-4",
                                "{step}"
                            }
                            h3 {
                                class: "text-2xl font-medium text-black mb-4 tracking-wide",
                                "{title}"
                            }
                            p {
                                class: "text-gray-600 font-light leading-relaxed",
                                "{description}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_creation() {
        let _about = rsx! { AboutSection {} };
    }
}
