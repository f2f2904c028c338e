use std::fmt;

/// Locales the text source can synthesize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocaleKey {
    EnUs,
    Pl,
    Uk,
}

impl LocaleKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en_US" => Some(Self::EnUs),
            "pl" => Some(Self::Pl),
            "uk" => Some(Self::Uk),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::Pl => "pl",
            Self::Uk => "uk",
        }
    }

    /// Embedded word lists; `None` for locales served by the `fake` crate.
    pub(crate) fn tables(self) -> Option<&'static LocaleTables> {
        match self {
            Self::EnUs => None,
            Self::Pl => Some(&PL),
            Self::Uk => Some(&UK),
        }
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word lists for a locale `fake` does not ship.
///
/// Surnames are `(masculine, feminine)` pairs. States are `(name, short)`
/// pairs. Masks follow the phone mask syntax.
pub(crate) struct LocaleTables {
    pub male_first_names: &'static [&'static str],
    pub female_first_names: &'static [&'static str],
    pub last_names: &'static [(&'static str, &'static str)],
    pub street_names: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub states: &'static [(&'static str, &'static str)],
    pub zip_mask: &'static str,
    pub building_masks: &'static [&'static str],
    pub secondary_masks: &'static [&'static str],
}

static PL: LocaleTables = LocaleTables {
    male_first_names: &[
        "Jan", "Piotr", "Krzysztof", "Andrzej", "Tomasz", "Paweł", "Michał", "Marcin",
        "Grzegorz", "Łukasz", "Adam", "Marek", "Jakub", "Wojciech", "Mateusz", "Stanisław",
        "Kamil", "Rafał", "Dariusz", "Zbigniew",
    ],
    female_first_names: &[
        "Anna", "Maria", "Katarzyna", "Małgorzata", "Agnieszka", "Barbara", "Ewa",
        "Krystyna", "Magdalena", "Elżbieta", "Joanna", "Aleksandra", "Monika", "Zofia",
        "Natalia", "Dorota", "Beata", "Karolina", "Agata", "Jadwiga",
    ],
    last_names: &[
        ("Nowak", "Nowak"),
        ("Kowalski", "Kowalska"),
        ("Wiśniewski", "Wiśniewska"),
        ("Wójcik", "Wójcik"),
        ("Kowalczyk", "Kowalczyk"),
        ("Kamiński", "Kamińska"),
        ("Lewandowski", "Lewandowska"),
        ("Zieliński", "Zielińska"),
        ("Szymański", "Szymańska"),
        ("Woźniak", "Woźniak"),
        ("Dąbrowski", "Dąbrowska"),
        ("Kozłowski", "Kozłowska"),
        ("Jankowski", "Jankowska"),
        ("Mazur", "Mazur"),
        ("Kwiatkowski", "Kwiatkowska"),
        ("Krawczyk", "Krawczyk"),
        ("Piotrowski", "Piotrowska"),
        ("Grabowski", "Grabowska"),
    ],
    street_names: &[
        "ul. Polna", "ul. Leśna", "ul. Słoneczna", "ul. Krótka", "ul. Szkolna",
        "ul. Ogrodowa", "ul. Lipowa", "ul. Brzozowa", "ul. Łąkowa", "ul. Kościuszki",
        "ul. Mickiewicza", "ul. Sienkiewicza", "ul. Kolejowa", "ul. Parkowa",
        "al. Jana Pawła II", "al. Niepodległości", "ul. Piłsudskiego", "ul. Słowackiego",
        "ul. Kopernika", "pl. Wolności",
    ],
    cities: &[
        "Warszawa", "Kraków", "Łódź", "Wrocław", "Poznań", "Gdańsk", "Szczecin",
        "Bydgoszcz", "Lublin", "Białystok", "Katowice", "Gdynia", "Częstochowa", "Radom",
        "Toruń", "Rzeszów", "Kielce", "Olsztyn", "Opole", "Zielona Góra",
    ],
    states: &[
        ("dolnośląskie", "DS"),
        ("kujawsko-pomorskie", "KP"),
        ("lubelskie", "LU"),
        ("lubuskie", "LB"),
        ("łódzkie", "LD"),
        ("małopolskie", "MA"),
        ("mazowieckie", "MZ"),
        ("opolskie", "OP"),
        ("podkarpackie", "PK"),
        ("podlaskie", "PD"),
        ("pomorskie", "PM"),
        ("śląskie", "SL"),
        ("świętokrzyskie", "SK"),
        ("warmińsko-mazurskie", "WN"),
        ("wielkopolskie", "WP"),
        ("zachodniopomorskie", "ZP"),
    ],
    zip_mask: "##-###",
    building_masks: &["^", "^#", "^##", "^#a"],
    secondary_masks: &["lok. ^", "lok. ^#"],
};

static UK: LocaleTables = LocaleTables {
    male_first_names: &[
        "Олександр", "Андрій", "Сергій", "Володимир", "Дмитро", "Іван", "Михайло", "Юрій",
        "Тарас", "Богдан", "Василь", "Петро", "Микола", "Олег", "Максим", "Артем", "Назар",
        "Ярослав", "Остап", "Віталій",
    ],
    female_first_names: &[
        "Олена", "Наталія", "Тетяна", "Ірина", "Оксана", "Світлана", "Юлія", "Марія",
        "Ганна", "Катерина", "Людмила", "Софія", "Анастасія", "Вікторія", "Дарина",
        "Христина", "Леся", "Галина", "Соломія", "Ольга",
    ],
    last_names: &[
        ("Шевченко", "Шевченко"),
        ("Коваленко", "Коваленко"),
        ("Бондаренко", "Бондаренко"),
        ("Ткаченко", "Ткаченко"),
        ("Кравченко", "Кравченко"),
        ("Олійник", "Олійник"),
        ("Шевчук", "Шевчук"),
        ("Поліщук", "Поліщук"),
        ("Мельник", "Мельник"),
        ("Бойко", "Бойко"),
        ("Ковальчук", "Ковальчук"),
        ("Савченко", "Савченко"),
        ("Петренко", "Петренко"),
        ("Руденко", "Руденко"),
        ("Лисенко", "Лисенко"),
        ("Марченко", "Марченко"),
        ("Ковальський", "Ковальська"),
        ("Грушевський", "Грушевська"),
        ("Коваль", "Коваль"),
        ("Яковенко", "Яковенко"),
    ],
    street_names: &[
        "вул. Шевченка", "вул. Івана Франка", "вул. Лесі Українки", "вул. Хрещатик",
        "вул. Грушевського", "вул. Сагайдачного", "вул. Садова", "вул. Миру",
        "вул. Центральна", "вул. Зелена", "вул. Лісова", "вул. Набережна",
        "просп. Свободи", "просп. Перемоги", "бульв. Шевченка", "вул. Соборна",
        "вул. Незалежності", "вул. Богдана Хмельницького", "вул. Козацька", "вул. Польова",
    ],
    cities: &[
        "Київ", "Харків", "Одеса", "Дніпро", "Львів", "Запоріжжя", "Вінниця", "Полтава",
        "Чернігів", "Черкаси", "Житомир", "Суми", "Хмельницький", "Рівне",
        "Івано-Франківськ", "Тернопіль", "Луцьк", "Ужгород", "Чернівці", "Кропивницький",
    ],
    states: &[
        ("Київська область", "Київська"),
        ("Харківська область", "Харківська"),
        ("Одеська область", "Одеська"),
        ("Дніпропетровська область", "Дніпропетровська"),
        ("Львівська область", "Львівська"),
        ("Запорізька область", "Запорізька"),
        ("Вінницька область", "Вінницька"),
        ("Полтавська область", "Полтавська"),
        ("Чернігівська область", "Чернігівська"),
        ("Черкаська область", "Черкаська"),
        ("Житомирська область", "Житомирська"),
        ("Сумська область", "Сумська"),
        ("Хмельницька область", "Хмельницька"),
        ("Рівненська область", "Рівненська"),
        ("Івано-Франківська область", "Івано-Франківська"),
        ("Тернопільська область", "Тернопільська"),
        ("Волинська область", "Волинська"),
        ("Закарпатська область", "Закарпатська"),
        ("Чернівецька область", "Чернівецька"),
        ("Кіровоградська область", "Кіровоградська"),
    ],
    zip_mask: "#####",
    building_masks: &["^", "^#", "^##", "^#а"],
    secondary_masks: &["кв. ^", "кв. ^#", "кв. ^##"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips() {
        for key in [LocaleKey::EnUs, LocaleKey::Pl, LocaleKey::Uk] {
            assert_eq!(LocaleKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(LocaleKey::parse("de_DE"), None);
    }

    #[test]
    fn embedded_tables_are_non_empty() {
        for key in [LocaleKey::Pl, LocaleKey::Uk] {
            let tables = key.tables().expect("embedded tables");
            assert!(!tables.male_first_names.is_empty());
            assert!(!tables.female_first_names.is_empty());
            assert!(!tables.last_names.is_empty());
            assert!(!tables.street_names.is_empty());
            assert!(!tables.cities.is_empty());
            assert!(!tables.states.is_empty());
            assert!(!tables.building_masks.is_empty());
            assert!(!tables.secondary_masks.is_empty());
        }
        assert!(LocaleKey::EnUs.tables().is_none());
    }
}
