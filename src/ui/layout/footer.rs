// src/ui/layout/footer.rs

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "bg-black text-white py-16",
            div {
                class: "max-w-7xl mx-auto px-6 lg:px-8",
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-12",

                    div {
                        h3 {
                            class: "text-xl font-light tracking-[0.3em] mb-4",
                            "VELUNA"
                        }
                        p {
                            class: "text-gray-400 font-light leading-relaxed",
                            "Handcrafted luxury eyewear from Italy. Each frame is a testament to generations of artisan expertise."
                        }
                    }

                    div {
                        h4 {
                            class: "text-sm font-medium tracking-wider uppercase mb-4",
                            "Explore"
                        }
                        div {
                            class: "space-y-2 flex flex-col",
                            Link {
                                to: Route::Collections {},
                                class: "text-gray-400 hover:text-white font-light",
                                "Collections"
                            }
                            Link {
                                to: Route::About {},
                                class: "text-gray-400 hover:text-white font-light",
                                "About"
                            }
                        }
                    }

                    div {
                        h4 {
                            class: "text-sm font-medium tracking-wider uppercase mb-4",
                            "Atelier"
                        }
                        p {
                            class: "text-gray-400 font-light",
                            "Via dei Fossi 12"
                        }
                        p {
                            class: "text-gray-400 font-light",
                            "50123 Firenze, Italia"
                        }
                    }
                }

                div {
                    class: "border-t border-gray-800 mt-12 pt-8 text-center",
                    p {
                        class: "text-gray-500 text-sm font-light",
                        "© 2026 Veluna Eyewear. All rights reserved."
                    }
                }
            }
        }
    }
}
