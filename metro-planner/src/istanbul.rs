//! Istanbul metro network seed data.
//!
//! The hardcoded network the planner ships with: nine lines wired together
//! by fifteen interchange connections. Station ids are `<line>A<n>` with `n`
//! counting from 1 along the line (the Marmaray commuter line uses the label
//! `B1`).

use crate::network::{MetroNetwork, MetroNetworkBuilder};

const M1_STATIONS: &[&str] = &[
    "Yenikapı",
    "Aksaray",
    "Emniyet-Fatih",
    "Topkapı-Ulubatlı",
    "Bayrampaşa-Maltepe",
    "Sağmalcılar",
    "Kocatepe",
    "Otogar",
    "Terazidere",
    "Davutpaşa–YTÜ",
    "Merter",
    "Zeytinburnu",
    "Bakırköy-İncirli",
    "Bahçelievler",
    "Ataköy-Şirinevler",
    "Yenibosna",
    "DTM–İstanbul",
    "Atatürk Havalimanı",
    "Esenler",
    "Menderes",
    "Üçyüzlü",
    "Bağcılar Meydan",
    "Kirazlı",
];

const M2_STATIONS: &[&str] = &[
    "Yenikapı",
    "Vezneciler-İstanbul Ü.",
    "Haliç",
    "Şişhane",
    "Taksim",
    "Osmanbey",
    "Şişli-Mecidiyeköy",
    "Gayrettepe",
    "Levent",
    "4.Levent",
    "Sanayi Mahalles",
    "Seyrantepe",
    "İTÜ-Ayazağa",
    "Atatürk Oto Sanayi",
    "Darüşşafaka",
    "Hacıosman",
];

const M3_STATIONS: &[&str] = &[
    "Bakırköy Sahil",
    "Özgürlük Meydanı",
    "İncirli",
    "Haznedar",
    "İlkyuva",
    "Molla Gürani",
    "Kirazlı-Bağcılar",
    "Yenimahalle",
    "Mahmutbey",
    "İSTOÇ",
    "İkitelli Sanayi",
    "Turgut Özal",
    "Siteler",
    "Başak Konutları",
    "Başakşehir-Metrokent",
    "Onurkent",
    "Şehir Hastanesi",
    "Toplu Konutlar",
    "Kayaşehir Merkez",
];

const M4_STATIONS: &[&str] = &[
    "Kadıköy",
    "Ayrılık Çeşmesi",
    "Acıbadem",
    "Ünalan",
    "Göztepe",
    "Yenisahra",
    "Pegasus-Kozyatağı",
    "Bostancı",
    "Küçükyalı",
    "Maltepe",
    "Huzurevi",
    "Gülsuyu",
    "Esenkent",
    "Hastane-Adliye",
    "Soğanlık",
    "Kartal",
    "Yakacık-Adnan Kahveci",
    "Pendik",
    "Tavşantepe",
    "Fevzi Çakmak-Hastane",
    "Yayalar-Şeyhli",
    "Kurtköy",
    "Sabiha Gökçen Havalimanı",
];

const M5_STATIONS: &[&str] = &[
    "Üsküdar",
    "Fıstıkağacı",
    "Bağlarbaşı",
    "Altunizade",
    "Kısıklı",
    "Bulgurlu",
    "Ümraniye",
    "Çarşı",
    "Yamanevler",
    "Çakmak",
    "Ihlamurkuyu",
    "Altınşehir",
    "İmam Hatip Lisesi",
    "Dudullu",
    "Necip Fazıl",
    "Çekmeköy",
    "Meclis",
    "Sarıgazi",
    "Sancaktepe",
    "Samandıra Merkez",
];

const M7_STATIONS: &[&str] = &[
    "Yıldız",
    "Fulya",
    "Mecidiyeköy",
    "Çağlayan",
    "Kağıthane",
    "Nurtepe",
    "Alibeyköy",
    "Çırçır Mahallesi",
    "Veysel Karani-Akşemsettin",
    "Yeşilpınar",
    "Kazım Karabekir",
    "Yenimahalle",
    "Karadeniz Mahallesi",
    "Tekstilkent-Giyimkent",
    "Oruç Reis",
    "Göztepe Mahallesi",
    "Mahmutbey",
];

const M8_STATIONS: &[&str] = &[
    "Bostancı",
    "Emin Ali Paşa",
    "Ayşekadın",
    "Kozyatağı",
    "Küçükbakkalköy",
    "İçerenköy",
    "Kayışdağı",
    "Mevlana",
    "İMES",
    "MODOKO-KEYAP",
    "Dudullu",
    "Huzur",
    "Parseller",
];

const M9_STATIONS: &[&str] = &[
    "Ataköy",
    "Yenibosna",
    "Çobançeşme",
    "29 Ekim Cumhuriyet",
    "Doğu Sanayi",
    "Mimar Sinan",
    "15 Temmuz",
    "Halkalı Caddesi",
    "Atatürk Mahallesi",
    "Bahariye",
    "MASKO",
    "İkitelli Sanayi",
    "Ziya Gökalp Mahallesi",
    "Olimpiyat",
];

const MARMARAY_STATIONS: &[&str] = &[
    "Halkalı",
    "Mustafa Kemal",
    "Küçükçekmece",
    "Florya",
    "Florya Akvaryum",
    "Yeşilköy",
    "Yeşilyurt",
    "Ataköy",
    "Bakırköy",
    "Yenimahalle",
    "Zeytinburnu",
    "Kazlıçeşme",
    "Yenikapı",
    "Sirkeci",
    "Üsküdar",
    "Ayrılık Çeşmesi",
    "Söğütlüçeşme",
    "Feneryolu",
    "Göztepe",
    "Erenköy",
    "Suadiye",
    "Bostancı",
    "Küçükyalı",
    "İdealtepe",
    "Süreyya Plajı",
    "Maltepe",
    "Cevizli",
    "Atalar",
    "Başak",
    "Kartal",
    "Yunus",
    "Pendik",
    "Kaynarca",
    "Tersane",
    "Güzelyalı",
    "Aydıntepe",
    "İçmeler",
    "Tuzla",
    "Çayırova",
    "Fatih",
    "Osmangazi",
    "Darıca",
    "Gebze",
];

/// Segment times on the metro lines alternate 2 and 3 minutes.
fn alternating(i: usize) -> u32 {
    if i % 2 == 0 { 2 } else { 3 }
}

/// Marmaray segments are uniformly 2 minutes.
fn uniform(_i: usize) -> u32 {
    2
}

/// Add one line's stations and its consecutive connections.
fn seed_line(
    mut builder: MetroNetworkBuilder,
    line: &str,
    names: &[&str],
    minutes: fn(usize) -> u32,
) -> MetroNetworkBuilder {
    for (i, name) in names.iter().enumerate() {
        builder = builder.station(&format!("{line}A{}", i + 1), name, line);
    }
    for i in 0..names.len().saturating_sub(1) {
        builder = builder.connection(
            &format!("{line}A{}", i + 1),
            &format!("{line}A{}", i + 2),
            minutes(i),
        );
    }
    builder
}

/// Build the Istanbul metro network.
pub fn istanbul_network() -> MetroNetwork {
    let mut builder = MetroNetworkBuilder::new();

    builder = seed_line(builder, "M1", M1_STATIONS, alternating);
    builder = seed_line(builder, "M2", M2_STATIONS, alternating);
    builder = seed_line(builder, "M3", M3_STATIONS, alternating);
    builder = seed_line(builder, "M4", M4_STATIONS, alternating);
    builder = seed_line(builder, "M5", M5_STATIONS, alternating);
    builder = seed_line(builder, "M7", M7_STATIONS, alternating);
    builder = seed_line(builder, "M8", M8_STATIONS, alternating);
    builder = seed_line(builder, "M9", M9_STATIONS, alternating);
    builder = seed_line(builder, "B1", MARMARAY_STATIONS, uniform);

    builder
        // Interchange connections between lines
        .connection("M1A1", "B1A13", 2) // Yenikapı (M1 - Marmaray)
        .connection("M2A1", "B1A13", 2) // Yenikapı (M2 - Marmaray)
        .connection("M1A1", "M2A1", 2) // Yenikapı (M1 - M2)
        .connection("M1A23", "M3A1", 1) // Kirazlı (M1 - M3)
        .connection("M2A7", "M7A3", 1) // Şişli-Mecidiyeköy (M2 - M7)
        .connection("M3A9", "M7A17", 1) // Mahmutbey (M3 - M7)
        .connection("M1A13", "M3A3", 1) // Bakırköy-İncirli (M1) - İncirli (M3)
        .connection("M3A2", "B1A9", 1) // Özgürlük Meydanı (M3) - Bakırköy (Marmaray)
        .connection("M4A2", "B1A16", 1) // Ayrılık Çeşmesi (M4 - Marmaray)
        .connection("M5A1", "B1A15", 1) // Üsküdar (M5 - Marmaray)
        .connection("M5A14", "M8A11", 1) // Dudullu (M5 - M8)
        .connection("M4A7", "M8A4", 1) // Kozyatağı (M4 - M8)
        .connection("M9A12", "M3A11", 1) // İkitelli Sanayi (M9 - M3)
        .connection("M1A16", "M9A2", 1) // Yenibosna (M1 - M9)
        .connection("M9A1", "B1A8", 1) // Ataköy (M9 - Marmaray)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use crate::planner::{find_fewest_hops, find_minimum_time};

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn station_counts() {
        let network = istanbul_network();
        assert_eq!(network.station_count(), 188);

        assert_eq!(network.line("M1").len(), 23);
        assert_eq!(network.line("M2").len(), 16);
        assert_eq!(network.line("M3").len(), 19);
        assert_eq!(network.line("M4").len(), 23);
        assert_eq!(network.line("M5").len(), 20);
        assert_eq!(network.line("M7").len(), 17);
        assert_eq!(network.line("M8").len(), 13);
        assert_eq!(network.line("M9").len(), 14);
        assert_eq!(network.line("B1").len(), 43);
    }

    #[test]
    fn known_stations_resolve() {
        let network = istanbul_network();

        let yenikapi = network.station(&sid("M1A1")).unwrap();
        assert_eq!(yenikapi.name(), "Yenikapı");
        assert_eq!(yenikapi.line(), "M1");

        let gebze = network.station(&sid("B1A43")).unwrap();
        assert_eq!(gebze.name(), "Gebze");
        assert_eq!(gebze.line(), "B1");
    }

    #[test]
    fn segment_times_alternate() {
        let network = istanbul_network();

        // M1A1-M1A2 is an even-indexed segment (2 min), M1A2-M1A3 odd (3 min)
        let first = find_minimum_time(&network, &sid("M1A1"), &sid("M1A2")).unwrap();
        assert_eq!(first.total_minutes, 2);
        let second = find_minimum_time(&network, &sid("M1A2"), &sid("M1A3")).unwrap();
        assert_eq!(second.total_minutes, 3);

        // Marmaray segments are all 2 minutes
        let marmaray = find_minimum_time(&network, &sid("B1A1"), &sid("B1A2")).unwrap();
        assert_eq!(marmaray.total_minutes, 2);
    }

    #[test]
    fn interchanges_connect_lines() {
        let network = istanbul_network();

        // Üsküdar: one interchange hop between M5 and Marmaray
        let route = find_fewest_hops(&network, &sid("M5A1"), &sid("B1A15")).unwrap();
        assert_eq!(route.hops(), 1);

        let timed = find_minimum_time(&network, &sid("M5A1"), &sid("B1A15")).unwrap();
        assert_eq!(timed.total_minutes, 1);
    }

    #[test]
    fn whole_network_is_connected() {
        let network = istanbul_network();
        let start = sid("M1A1");
        for station in network.stations() {
            assert!(
                find_fewest_hops(&network, &start, station.id()).is_some(),
                "no route from M1A1 to {}",
                station.id()
            );
        }
    }

    #[test]
    fn cross_city_route() {
        // Aksaray (M1, European side) to Kadıköy (M4, Asian side) must cross
        // the Marmaray via Yenikapı and change at Ayrılık Çeşmesi.
        let network = istanbul_network();
        let timed = find_minimum_time(&network, &sid("M1A2"), &sid("M4A1")).unwrap();

        assert_eq!(timed.stations.first(), Some(&sid("M1A2")));
        assert_eq!(timed.stations.last(), Some(&sid("M4A1")));
        assert!(timed.stations.contains(&sid("B1A13")), "expected Yenikapı");
        assert!(
            timed.stations.contains(&sid("B1A16")),
            "expected Ayrılık Çeşmesi"
        );

        // M1A2-M1A1 (2) + interchange (2) + Marmaray B1A13..B1A16 (6) +
        // interchange (1) + M4A2-M4A1 (2)
        assert_eq!(timed.total_minutes, 13);
    }
}
