use transfer_search::{
    ContactConfig, DestinationSearcher, SearchConfigBuilder, contact, locale,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    transfer_search::init_logging(tracing::Level::INFO)?;

    let searcher = DestinationSearcher::new_embedded()?;
    let lang = locale::from_query(&std::env::args().nth(2).unwrap_or_default());
    let query = std::env::args().nth(1).unwrap_or_else(|| "ben".to_string());

    println!("Suggestions for '{query}' ({lang}):");
    let config = SearchConfigBuilder::suggestions().build();
    for hit in searcher.search_hits(&query, &config) {
        let destination = hit.destination;
        println!(
            "  {:<28} €{:>6} {:>4} min {:>6} km   (matched {} name '{}')",
            locale::display_name(destination, lang),
            destination.price_eur(),
            destination.duration_minutes(),
            destination.distance_km(),
            hit.matched_locale,
            hit.matched_name(),
        );
    }

    let best = searcher.lookup(&query);
    match best {
        Some(destination) => println!("Best match: {destination}"),
        None => println!("No destination found, offering a custom quote"),
    }

    let contact_config = ContactConfig::default();
    let message = contact::quote_message(lang, &query, best);
    println!("WhatsApp: {}", contact::whatsapp_link(&contact_config, &message)?);
    println!("Call:     {}", contact::call_link(&contact_config));

    Ok(())
}
