use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::join::Join;
use crate::components::newsletter::Newsletter;
use crate::components::sections::{Events, Photos, Programs, Why};
use crate::content::use_content;
use crate::hooks::reveal::use_reveal;

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_content();
    use_reveal();

    let page_style = format!("background-color: {}; color: white;", content.ui.brand.bg);

    html! {
        <div class="site" style={page_style}>
            <Header />
            <Hero />
            <Why />
            <Programs />
            <Events />
            <Photos />
            <Newsletter />
            <Join />
            <Footer />
        </div>
    }
}
