//! Localized e-mail text.
//!
//! Leads carry `{name}` and `{order_number}` placeholders that the layout
//! swaps for BaseLinker tags; help text carries `{phone}` and `{email}`.

use crate::kind::TemplateKind;
use crate::market::Market;

/// Text shared by every template of a market.
#[derive(Debug, Clone, Copy)]
pub struct MarketText {
    pub brand_name: &'static str,
    pub timeline_confirmed: &'static str,
    pub timeline_paid: &'static str,
    pub timeline_shipped: &'static str,
    pub track_order: &'static str,
    pub your_order: &'static str,
    pub quantity: &'static str,
    pub total_to_pay: &'static str,
    pub delivery_details: &'static str,
    pub shipping_address: &'static str,
    pub payment: &'static str,
    pub shipping: &'static str,
    pub need_help: &'static str,
    pub need_help_text: &'static str,
    pub copyright: &'static str,
}

/// Heading and opening paragraphs of one template.
#[derive(Debug, Clone, Copy)]
pub struct KindText {
    pub title: &'static str,
    pub greeting: &'static str,
    pub lead: &'static str,
    pub follow_up: &'static str,
}

/// Payment instructions of the bank-transfer template.
#[derive(Debug, Clone, Copy)]
pub struct BankText {
    pub details_title: &'static str,
    pub bank: &'static str,
    pub reference: &'static str,
    pub amount: &'static str,
    pub speed_up_title: &'static str,
    pub speed_up_text: &'static str,
}

#[must_use]
pub fn market_text(market: Market) -> MarketText {
    match market {
        Market::Cs => MarketText {
            brand_name: "Springfree trampolíny",
            timeline_confirmed: "Potvrzeno",
            timeline_paid: "Zaplaceno",
            timeline_shipped: "Odesláno",
            track_order: "Sledovat stav",
            your_order: "Vaše objednávka",
            quantity: "Množství",
            total_to_pay: "Celkem k úhradě",
            delivery_details: "Dodací údaje",
            shipping_address: "Doručovací adresa",
            payment: "Platba",
            shipping: "Doprava",
            need_help: "Potřebujete poradit?",
            need_help_text: "Jsme tu pro Vás. Zavolejte nám na {phone} nebo napište na {email}",
            copyright: "© 2026 Springfree Trampoline. Všechna práva vyhrazena.",
        },
        Market::Sk => MarketText {
            brand_name: "Springfree trampolíny",
            timeline_confirmed: "Potvrdené",
            timeline_paid: "Zaplatené",
            timeline_shipped: "Odoslané",
            track_order: "Sledovať stav",
            your_order: "Vaša objednávka",
            quantity: "Množstvo",
            total_to_pay: "Celkom k úhrade",
            delivery_details: "Dodacie údaje",
            shipping_address: "Doručovacia adresa",
            payment: "Platba",
            shipping: "Doprava",
            need_help: "Potrebujete poradiť?",
            need_help_text: "Sme tu pre Vás. Zavolajte nám na {phone} alebo napíšte na {email}",
            copyright: "© 2026 Springfree Trampoline. Všetky práva vyhradené.",
        },
        Market::De => MarketText {
            brand_name: "Springfree Trampoline",
            timeline_confirmed: "Bestätigt",
            timeline_paid: "Bezahlt",
            timeline_shipped: "Versandt",
            track_order: "Status verfolgen",
            your_order: "Ihre Bestellung",
            quantity: "Menge",
            total_to_pay: "Gesamtbetrag",
            delivery_details: "Lieferdetails",
            shipping_address: "Lieferadresse",
            payment: "Zahlung",
            shipping: "Versand",
            need_help: "Brauchen Sie Hilfe?",
            need_help_text:
                "Wir sind für Sie da. Rufen Sie uns an unter {phone} oder schreiben Sie an {email}",
            copyright: "© 2026 Springfree Trampoline. Alle Rechte vorbehalten.",
        },
        Market::Pl => MarketText {
            brand_name: "Springfree trampoliny",
            timeline_confirmed: "Potwierdzone",
            timeline_paid: "Opłacone",
            timeline_shipped: "Wysłane",
            track_order: "Śledź status",
            your_order: "Twoje zamówienie",
            quantity: "Ilość",
            total_to_pay: "Razem do zapłaty",
            delivery_details: "Dane dostawy",
            shipping_address: "Adres dostawy",
            payment: "Płatność",
            shipping: "Dostawa",
            need_help: "Potrzebujesz pomocy?",
            need_help_text:
                "Jesteśmy do Twojej dyspozycji. Zadzwoń pod numer {phone} lub napisz na {email}",
            copyright: "© 2026 Springfree Trampoline. Wszelkie prawa zastrzeżone.",
        },
        Market::Hu => MarketText {
            brand_name: "Springfree trambulinok",
            timeline_confirmed: "Visszaigazolva",
            timeline_paid: "Kifizetve",
            timeline_shipped: "Elküldve",
            track_order: "Állapot követése",
            your_order: "Az Ön rendelése",
            quantity: "Mennyiség",
            total_to_pay: "Fizetendő összeg",
            delivery_details: "Szállítási adatok",
            shipping_address: "Szállítási cím",
            payment: "Fizetés",
            shipping: "Szállítás",
            need_help: "Segítségre van szüksége?",
            need_help_text:
                "Készséggel állunk rendelkezésére. Hívjon minket: {phone} vagy írjon: {email}",
            copyright: "© 2026 Springfree Trampoline. Minden jog fenntartva.",
        },
        Market::Sl => MarketText {
            brand_name: "Springfree trampolini",
            timeline_confirmed: "Potrjeno",
            timeline_paid: "Plačano",
            timeline_shipped: "Poslano",
            track_order: "Sledite statusu",
            your_order: "Vaše naročilo",
            quantity: "Količina",
            total_to_pay: "Skupaj za plačilo",
            delivery_details: "Podatki o dostavi",
            shipping_address: "Naslov za dostavo",
            payment: "Plačilo",
            shipping: "Dostava",
            need_help: "Potrebujete pomoč?",
            need_help_text: "Smo vam na voljo. Pokličite nas na {phone} ali pišite na {email}",
            copyright: "© 2026 Springfree Trampoline. Vse pravice pridržane.",
        },
        Market::Hr => MarketText {
            brand_name: "Springfree trampolini",
            timeline_confirmed: "Potvrđeno",
            timeline_paid: "Plaćeno",
            timeline_shipped: "Poslano",
            track_order: "Pratite status",
            your_order: "Vaša narudžba",
            quantity: "Količina",
            total_to_pay: "Ukupno za plaćanje",
            delivery_details: "Podaci o isporuci",
            shipping_address: "Adresa za isporuku",
            payment: "Plaćanje",
            shipping: "Dostava",
            need_help: "Trebate pomoć?",
            need_help_text: "Tu smo za Vas. Nazovite nas na {phone} ili pišite na {email}",
            copyright: "© 2026 Springfree Trampoline. Sva prava pridržana.",
        },
    }
}

#[must_use]
pub fn kind_text(market: Market, kind: TemplateKind) -> KindText {
    match kind {
        TemplateKind::OrderConfirmation => order_confirmation(market),
        TemplateKind::BankTransfer => bank_transfer(market),
        TemplateKind::PaymentConfirmed => payment_confirmed(market),
        TemplateKind::OrderShipped => order_shipped(market),
    }
}

fn order_confirmation(market: Market) -> KindText {
    let (title, greeting, lead, follow_up) = match market {
        Market::Cs => (
            "Potvrzení objednávky",
            "Děkujeme za Vaši objednávku!",
            "Vážený/á {name}, Vaše objednávka č. {order_number} byla úspěšně přijata.",
            "O dalších krocích Vás budeme brzy informovat.",
        ),
        Market::Sk => (
            "Potvrdenie objednávky",
            "Ďakujeme za Vašu objednávku!",
            "Vážený/á {name}, Vaša objednávka č. {order_number} bola úspešne prijatá.",
            "O ďalších krokoch Vás budeme čoskoro informovať.",
        ),
        Market::De => (
            "Bestellbestätigung",
            "Vielen Dank für Ihre Bestellung!",
            "Sehr geehrte/r {name}, Ihre Bestellung Nr. {order_number} wurde erfolgreich angenommen.",
            "Wir werden Sie in Kürze über die nächsten Schritte informieren.",
        ),
        Market::Pl => (
            "Potwierdzenie zamówienia",
            "Dziękujemy za zamówienie!",
            "Szanowny/a {name}, Twoje zamówienie nr {order_number} zostało przyjęte.",
            "Wkrótce skontaktujemy się z Tobą w sprawie kolejnych kroków.",
        ),
        Market::Hu => (
            "Rendelés-visszaigazolás",
            "Köszönjük a rendelését!",
            "Tisztelt {name}, a(z) {order_number} számú rendelése sikeresen rögzítésre került.",
            "Hamarosan tájékoztatjuk Önt a következő lépésekről.",
        ),
        Market::Sl => (
            "Potrditev naročila",
            "Hvala za vaše naročilo!",
            "Spoštovani {name}, vaše naročilo št. {order_number} je bilo uspešno sprejeto.",
            "Kmalu vas bomo obvestili o nadaljnjih korakih.",
        ),
        Market::Hr => (
            "Potvrda narudžbe",
            "Hvala na Vašoj narudžbi!",
            "Poštovani {name}, Vaša narudžba br. {order_number} je uspješno zaprimljena.",
            "Uskoro ćemo Vas obavijestiti o sljedećim koracima.",
        ),
    };
    KindText {
        title,
        greeting,
        lead,
        follow_up,
    }
}

fn bank_transfer(market: Market) -> KindText {
    let (title, greeting, lead, follow_up) = match market {
        Market::Cs => (
            "Čekáme na Vaši platbu",
            "Dokončete svou objednávku",
            "Vážený/á {name}, Vaše objednávka č. {order_number} byla přijata a čeká na uhrazení.",
            "Pro odeslání zboží prosím proveďte platbu na níže uvedený účet.",
        ),
        Market::Sk => (
            "Čakáme na Vašu platbu",
            "Dokončite svoju objednávku",
            "Vážený/á {name}, Vaša objednávka č. {order_number} bola prijatá a čaká na uhradenie.",
            "Pre odoslanie tovaru prosím vykonajte platbu na nižšie uvedený účet.",
        ),
        Market::De => (
            "Wir warten auf Ihre Zahlung",
            "Schließen Sie Ihre Bestellung ab",
            "Sehr geehrte/r {name}, Ihre Bestellung Nr. {order_number} wurde angenommen und wartet auf Bezahlung.",
            "Bitte überweisen Sie den Betrag auf das unten angegebene Konto, um den Versand zu starten.",
        ),
        Market::Pl => (
            "Czekamy na Twoją płatność",
            "Dokończ swoje zamówienie",
            "Szanowny/a {name}, Twoje zamówienie nr {order_number} zostało przyjęte i czeka na opłacenie.",
            "Aby rozpocząć wysyłkę, prosimy o dokonanie przelewu na poniższe konto.",
        ),
        Market::Hu => (
            "Várjuk a fizetését",
            "Fejezze be rendelését",
            "Tisztelt {name}, a(z) {order_number} számú rendelése rögzítésre került és fizetésre vár.",
            "A szállítás megkezdéséhez kérjük, utalja át az összeget az alábbi számlára.",
        ),
        Market::Sl => (
            "Čakamo na vaše plačilo",
            "Dokončajte svoje naročilo",
            "Spoštovani {name}, vaše naročilo št. {order_number} je bilo sprejeto in čaka na plačilo.",
            "Za začetek pošiljanja prosimo nakažite znesek na spodnji račun.",
        ),
        Market::Hr => (
            "Čekamo Vašu uplatu",
            "Dovršite svoju narudžbu",
            "Poštovani {name}, Vaša narudžba br. {order_number} je zaprimljena i čeka na uplatu.",
            "Za početak slanja molimo uplatite iznos na donji račun.",
        ),
    };
    KindText {
        title,
        greeting,
        lead,
        follow_up,
    }
}

fn payment_confirmed(market: Market) -> KindText {
    let (title, greeting, lead, follow_up) = match market {
        Market::Cs => (
            "Platba přijata",
            "Děkujeme za platbu!",
            "Vážený/á {name}, platba za objednávku č. {order_number} byla úspěšně přijata.",
            "Vaši objednávku nyní připravujeme k odeslání.",
        ),
        Market::Sk => (
            "Platba prijatá",
            "Ďakujeme za platbu!",
            "Vážený/á {name}, platba za objednávku č. {order_number} bola úspešne prijatá.",
            "Vašu objednávku teraz pripravujeme na odoslanie.",
        ),
        Market::De => (
            "Zahlung eingegangen",
            "Vielen Dank für Ihre Zahlung!",
            "Sehr geehrte/r {name}, die Zahlung für Ihre Bestellung Nr. {order_number} wurde erfolgreich empfangen.",
            "Wir bereiten Ihre Bestellung jetzt für den Versand vor.",
        ),
        Market::Pl => (
            "Płatność otrzymana",
            "Dziękujemy za płatność!",
            "Szanowny/a {name}, płatność za zamówienie nr {order_number} została pomyślnie zaksięgowana.",
            "Twoje zamówienie jest teraz przygotowywane do wysyłki.",
        ),
        Market::Hu => (
            "Fizetés megérkezett",
            "Köszönjük a fizetést!",
            "Tisztelt {name}, a(z) {order_number} számú rendelése fizetése sikeresen megérkezett.",
            "Rendelését most készítjük elő a szállításra.",
        ),
        Market::Sl => (
            "Plačilo prejeto",
            "Hvala za plačilo!",
            "Spoštovani {name}, plačilo za vaše naročilo št. {order_number} je bilo uspešno prejeto.",
            "Vaše naročilo zdaj pripravljamo za pošiljanje.",
        ),
        Market::Hr => (
            "Uplata primljena",
            "Hvala na uplati!",
            "Poštovani {name}, uplata za Vašu narudžbu br. {order_number} je uspješno zaprimljena.",
            "Vašu narudžbu sada pripremamo za slanje.",
        ),
    };
    KindText {
        title,
        greeting,
        lead,
        follow_up,
    }
}

fn order_shipped(market: Market) -> KindText {
    let (title, greeting, lead, follow_up) = match market {
        Market::Cs => (
            "Objednávka odeslána",
            "Vaše objednávka je na cestě!",
            "Vážený/á {name}, Vaše objednávka č. {order_number} byla právě odeslána.",
            "Již brzy se budete moci těšit na skákání!",
        ),
        Market::Sk => (
            "Objednávka odoslaná",
            "Vaša objednávka je na ceste!",
            "Vážený/á {name}, Vaša objednávka č. {order_number} bola práve odoslaná.",
            "Už čoskoro sa budete môcť tešiť na skákanie!",
        ),
        Market::De => (
            "Bestellung versandt",
            "Ihre Bestellung ist unterwegs!",
            "Sehr geehrte/r {name}, Ihre Bestellung Nr. {order_number} wurde soeben versandt.",
            "Schon bald können Sie sich auf das Springen freuen!",
        ),
        Market::Pl => (
            "Zamówienie wysłane",
            "Twoje zamówienie jest w drodze!",
            "Szanowny/a {name}, Twoje zamówienie nr {order_number} zostało właśnie wysłane.",
            "Już wkrótce będziesz mógł/mogła cieszyć się skakaniem!",
        ),
        Market::Hu => (
            "Rendelés elküldve",
            "Rendelése úton van!",
            "Tisztelt {name}, a(z) {order_number} számú rendelése most lett elküldve.",
            "Hamarosan élvezheti az ugrálást!",
        ),
        Market::Sl => (
            "Naročilo poslano",
            "Vaše naročilo je na poti!",
            "Spoštovani {name}, vaše naročilo št. {order_number} je bilo pravkar poslano.",
            "Kmalu se boste lahko veselili skakanja!",
        ),
        Market::Hr => (
            "Narudžba poslana",
            "Vaša narudžba je na putu!",
            "Poštovani {name}, Vaša narudžba br. {order_number} je upravo poslana.",
            "Uskoro ćete uživati u skakanju!",
        ),
    };
    KindText {
        title,
        greeting,
        lead,
        follow_up,
    }
}

#[must_use]
pub fn bank_text(market: Market) -> BankText {
    match market {
        Market::Cs => BankText {
            details_title: "Platební údaje",
            bank: "Banka",
            reference: "Variabilní symbol",
            amount: "Částka k úhradě",
            speed_up_title: "Chcete urychlit odeslání?",
            speed_up_text: "Odpovězte na tento email a přiložte potvrzení o odeslání platby z Vaší banky. Objednávku pak zpracujeme přednostně.",
        },
        Market::Sk => BankText {
            details_title: "Platobné údaje",
            bank: "Banka",
            reference: "Variabilný symbol",
            amount: "Suma na úhradu",
            speed_up_title: "Chcete urýchliť odoslanie?",
            speed_up_text: "Odpovedzte na tento email a priložte potvrdenie o odoslaní platby z Vašej banky. Objednávku potom spracujeme prednostne.",
        },
        Market::De => BankText {
            details_title: "Zahlungsinformationen",
            bank: "Bank",
            reference: "Verwendungszweck",
            amount: "Zu zahlender Betrag",
            speed_up_title: "Möchten Sie den Versand beschleunigen?",
            speed_up_text: "Antworten Sie auf diese E-Mail und fügen Sie eine Zahlungsbestätigung Ihrer Bank bei. Wir werden Ihre Bestellung dann bevorzugt bearbeiten.",
        },
        Market::Pl => BankText {
            details_title: "Dane do przelewu",
            bank: "Bank",
            reference: "Tytuł przelewu",
            amount: "Kwota do zapłaty",
            speed_up_title: "Chcesz przyspieszyć wysyłkę?",
            speed_up_text: "Odpowiedz na ten email i dołącz potwierdzenie przelewu z Twojego banku. Wtedy przetworzymy Twoje zamówienie priorytetowo.",
        },
        Market::Hu => BankText {
            details_title: "Fizetési adatok",
            bank: "Bank",
            reference: "Közlemény",
            amount: "Fizetendő összeg",
            speed_up_title: "Szeretné gyorsítani a szállítást?",
            speed_up_text: "Válaszoljon erre az e-mailre, és csatolja a bankjától kapott átutalási igazolást. Így rendelését elsőbbséggel kezeljük.",
        },
        Market::Sl => BankText {
            details_title: "Podatki za plačilo",
            bank: "Banka",
            reference: "Referenca",
            amount: "Znesek za plačilo",
            speed_up_title: "Želite pospešiti pošiljanje?",
            speed_up_text: "Odgovorite na to e-pošto in priložite potrdilo o nakazilu iz vaše banke. Vaše naročilo bomo nato obdelali prednostno.",
        },
        Market::Hr => BankText {
            details_title: "Podaci za plaćanje",
            bank: "Banka",
            reference: "Poziv na broj",
            amount: "Iznos za uplatu",
            speed_up_title: "Želite ubrzati slanje?",
            speed_up_text: "Odgovorite na ovaj email i priložite potvrdu o uplati iz Vaše banke. Tada ćemo Vašu narudžbu obraditi prioritetno.",
        },
    }
}
