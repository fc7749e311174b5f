use yew::prelude::*;

use crate::model::{CardContent, CardVariant};

#[derive(Properties, PartialEq, Clone)]
pub struct LocationCardProps {
    pub card: CardContent,
    /// Fired once after the first render (the map uses it to open the popup).
    #[prop_or_default]
    pub on_rendered: Option<Callback<()>>,
}

#[function_component(LocationCard)]
pub fn location_card(props: &LocationCardProps) -> Html {
    {
        let on_rendered = props.on_rendered.clone();
        use_effect_with((), move |_| {
            if let Some(cb) = on_rendered {
                cb.emit(());
            }
            || ()
        });
    }

    let card = &props.card;
    let address = card
        .address
        .iter()
        .map(|line| html! { <p style="margin: 5px 0; font-size: inherit;">{ line.clone() }</p> })
        .collect::<Html>();

    match card.variant {
        CardVariant::Popup => html! {
            <div style="padding: 5px; min-width: 200px;">
                <h3 style="margin: 0 0 10px 0; color: #2563eb; font-size: 16px;">{ card.title.clone() }</h3>
                {
                    if let Some(owner) = &card.owner {
                        html! { <p style="margin: 5px 0; font-size: 13px;"><strong>{"Owner:"}</strong>{" "}{ owner.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <p style="margin: 5px 0; font-size: 13px;"><strong>{"Address:"}</strong></p>
                <div style="font-size: 13px;">{ address }</div>
                <p style="margin: 10px 0 5px 0; font-size: 13px;"><strong>{"Coordinates:"}</strong></p>
                <p style="margin: 5px 0; font-size: 12px;">{ card.dms.clone() }</p>
                <p style="margin: 5px 0; font-size: 12px;">{ card.decimal.clone() }</p>
                <a href={card.link.clone()} target="_blank" rel="noopener"
                   style="display: inline-block; margin-top: 10px; padding: 8px 15px; background: #2563eb; color: white; text-decoration: none; border-radius: 5px; font-size: 12px;">
                    {"Open in Google Maps"}
                </a>
            </div>
        },
        CardVariant::Panel => html! {
            <div style="display: flex; align-items: center; justify-content: center; height: 100%; background: #f0f0f0; color: #666; flex-direction: column; padding: 20px; text-align: center;">
                <h3 style="margin-bottom: 10px; color: #2563eb;">{ card.title.clone() }</h3>
                <p style="margin: 5px 0;"><strong>{"Address:"}</strong></p>
                { address }
                <p style="margin: 10px 0 5px 0;"><strong>{"Coordinates:"}</strong></p>
                <p style="margin: 5px 0;">{ card.dms.clone() }</p>
                <p style="margin: 5px 0;">{ card.decimal.clone() }</p>
                <a href={card.link.clone()} target="_blank" rel="noopener"
                   style="margin-top: 15px; padding: 10px 20px; background: #2563eb; color: white; text-decoration: none; border-radius: 5px;">
                    {"Open in Google Maps"}
                </a>
            </div>
        },
    }
}
