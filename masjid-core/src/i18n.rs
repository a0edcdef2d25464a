//! Translated UI texts.
//!
//! The tables are plain static data and are never modified at runtime.

use crate::entities::Prayer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Language {
    pub fn texts(self) -> &'static Texts {
        match self {
            Self::En => &EN,
            Self::Ar => &AR,
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    pub const fn dir(self) -> TextDirection {
        match self {
            Self::En => TextDirection::Ltr,
            Self::Ar => TextDirection::Rtl,
        }
    }

    /// BCP 47 tag used to format dates and times.
    pub const fn locale(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Ar => "ar-SA",
        }
    }

    /// The name of a language in its own script.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    pub const fn font_family(self) -> &'static str {
        match self {
            Self::En => "Inter, sans-serif",
            Self::Ar => "Cairo, sans-serif",
        }
    }
}

#[rustfmt::skip]
#[derive(Debug)]
pub struct Texts {
    pub title          : &'static str,
    pub subtitle       : &'static str,
    pub your_location  : &'static str,
    pub nearby_mosques : &'static str,
    pub prayer_times   : &'static str,
    pub within         : &'static str,
    pub select_mosque  : &'static str,
    pub today          : &'static str,
    pub fajr           : &'static str,
    pub sunrise        : &'static str,
    pub dhuhr          : &'static str,
    pub asr            : &'static str,
    pub maghrib        : &'static str,
    pub isha           : &'static str,
    pub jumua          : &'static str,
    pub adhan          : &'static str,
    pub iqama          : &'static str,
    pub contact        : &'static str,
    pub phone          : &'static str,
    pub email          : &'static str,
    pub website        : &'static str,
    pub facilities     : &'static str,
    pub away           : &'static str,
    pub powered_by     : &'static str,
    pub no_mosques     : &'static str,
    pub error_title    : &'static str,
    pub check_proxy    : &'static str,
    pub show_map       : &'static str,
    pub hide_map       : &'static str,
    pub get_directions : &'static str,
    pub retry          : &'static str,
    pub dismiss        : &'static str,
    pub no_geolocation : &'static str,
    pub visit_upstream : &'static str,
}

impl Texts {
    pub const fn prayer(&self, prayer: Prayer) -> &'static str {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

#[rustfmt::skip]
static EN: Texts = Texts {
    title          : "Mawaqit",
    subtitle       : "Prayer Times & Mosques",
    your_location  : "Your location",
    nearby_mosques : "Nearby Mosques",
    prayer_times   : "Prayer Times",
    within         : "Within 1km of your location",
    select_mosque  : "Select a mosque to view prayer times",
    today          : "Today's Prayer Times",
    fajr           : "Fajr",
    sunrise        : "Sunrise",
    dhuhr          : "Dhuhr",
    asr            : "Asr",
    maghrib        : "Maghrib",
    isha           : "Isha",
    jumua          : "Jumu'ah",
    adhan          : "Adhan",
    iqama          : "Iqama",
    contact        : "Contact Information",
    phone          : "Phone",
    email          : "Email",
    website        : "Website",
    facilities     : "Facilities",
    away           : "away",
    powered_by     : "Powered by Mawaqit",
    no_mosques     : "No mosques found nearby",
    error_title    : "Error",
    check_proxy    : "Make sure the proxy server is running",
    show_map       : "Show Map",
    hide_map       : "Hide Map",
    get_directions : "Get Directions",
    retry          : "Try again",
    dismiss        : "Dismiss",
    no_geolocation : "Geolocation is not supported",
    visit_upstream : "Visit Official Mawaqit Website",
};

#[rustfmt::skip]
static AR: Texts = Texts {
    title          : "مواقيت",
    subtitle       : "أوقات الصلاة والمساجد",
    your_location  : "موقعك",
    nearby_mosques : "المساجد القريبة",
    prayer_times   : "أوقات الصلاة",
    within         : "ضمن 1 كم من موقعك",
    select_mosque  : "اختر مسجدًا لعرض أوقات الصلاة",
    today          : "أوقات الصلاة اليوم",
    fajr           : "الفجر",
    sunrise        : "الشروق",
    dhuhr          : "الظهر",
    asr            : "العصر",
    maghrib        : "المغرب",
    isha           : "العشاء",
    jumua          : "الجمعة",
    adhan          : "الأذان",
    iqama          : "الإقامة",
    contact        : "معلومات الاتصال",
    phone          : "الهاتف",
    email          : "البريد الإلكتروني",
    website        : "الموقع",
    facilities     : "المرافق",
    away           : "بعيدًا",
    powered_by     : "مدعوم من مواقيت",
    no_mosques     : "لم يتم العثور على مساجد قريبة",
    error_title    : "خطأ",
    check_proxy    : "تأكد من تشغيل الخادم الوكيل",
    show_map       : "عرض الخريطة",
    hide_map       : "إخفاء الخريطة",
    get_directions : "احصل على الاتجاهات",
    retry          : "حاول مرة أخرى",
    dismiss        : "إغلاق",
    no_geolocation : "تحديد الموقع الجغرافي غير مدعوم",
    visit_upstream : "زيارة الموقع الرسمي لمواقيت",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_language() {
        assert_eq!(Language::Ar, Language::En.toggle());
        assert_eq!(Language::En, Language::En.toggle().toggle());
        assert_eq!("rtl", Language::Ar.dir().as_str());
        assert_eq!("ltr", Language::default().dir().as_str());
    }

    #[test]
    fn prayer_names() {
        assert_eq!("Maghrib", Language::En.texts().prayer(Prayer::Maghrib));
        assert_eq!("الفجر", Language::Ar.texts().prayer(Prayer::Fajr));
    }

    #[test]
    fn all_texts_are_translated() {
        for prayer in Prayer::all() {
            assert_ne!(
                Language::En.texts().prayer(prayer),
                Language::Ar.texts().prayer(prayer)
            );
        }
        assert_ne!(Language::En.texts().title, Language::Ar.texts().title);
        assert_ne!(Language::En.texts().retry, Language::Ar.texts().retry);
    }
}
