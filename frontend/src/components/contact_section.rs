use shared::DeepLinkBuilder;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub links: DeepLinkBuilder,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    html! {
        <section class="card contact-section">
            <h2 class="section-title">{"📞 Contact Us"}</h2>
            <div class="contact-body">
                <p class="contact-hours">{"Available 24/7 for your convenience"}</p>
                <div class="contact-actions">
                    <a
                        class="btn btn-whatsapp"
                        href={props.links.chat_link().to_string()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"💬 Chat on WhatsApp"}
                    </a>
                    <a class="btn btn-outline" href={props.links.call_link().to_string()}>
                        {format!("📞 Call {}", props.links.display_phone())}
                    </a>
                </div>
            </div>
        </section>
    }
}
