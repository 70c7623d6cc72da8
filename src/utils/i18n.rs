// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN - bengalí por defecto, inglés secundario
// ============================================================================

use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "BN";

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Splash / Home
            translations.insert("app_tagline", "Islamic Application Bangladesh New Unity");
            translations.insert("app_motto", "Pray on time, strengthen your faith");
            translations.insert("home_title", "Islamic Application");
            translations.insert("today_date", "Today's date");
            translations.insert("prayer_schedule", "Prayer schedule");
            translations.insert("current_prayer", "Current prayer");

            // Navegación
            translations.insert("nav_home", "Home");
            translations.insert("nav_menu", "Menu");
            translations.insert("nav_messages", "Messages");
            translations.insert("nav_settings", "Settings");
            translations.insert("nav_login", "Login");
            translations.insert("menu_district", "District");
            translations.insert("menu_thana", "Thana");
            translations.insert("menu_union", "Union");
            translations.insert("menu_report", "Report");
            translations.insert("menu_fund", "Fund");

            // Directorio
            translations.insert("district_title", "District committee");
            translations.insert("district_subtitle", "Contact directly");
            translations.insert("thana_title", "Thana list");
            translations.insert("thana_subtitle", "Select your thana");
            translations.insert("union_title", "Union list");
            translations.insert("union_subtitle", "Select your union");
            translations.insert("members_title", "Members");
            translations.insert("union_members_title", "Union members");
            translations.insert("checking_session", "Checking session...");
            translations.insert("loading_data", "Loading data...");
            translations.insert("no_data_now", "No data available right now");
            translations.insert("no_thana", "No thana found");
            translations.insert("no_union", "No union found");
            translations.insert("no_members", "No members found");
            translations.insert("thana_not_found", "Thana not found");
            translations.insert("union_not_found", "Union not found");
            translations.insert("load_failed", "Could not load data. Please try again later");
            translations.insert("retry", "Try again");
            translations.insert("blood_group", "Blood group");
            translations.insert("phone", "Phone");
            translations.insert("email", "Email");

            // Login
            translations.insert("login_title", "Login");
            translations.insert("user_id", "User ID");
            translations.insert("password", "Password");
            translations.insert("loading", "Loading...");
            translations.insert("fill_all_fields", "Please fill in all fields");
            translations.insert("id_not_found", "ID not found");
            translations.insert("wrong_password", "Incorrect password");
            translations.insert("login_failed", "Login failed, please try again later");

            // Reporte
            translations.insert("report_branch", "Branch");
            translations.insert("report_district", "District");
            translations.insert("report_type", "Type");
            translations.insert("report_description", "Report description");
            translations.insert("report_submit", "Submit Report");
            translations.insert("report_success", "Report submitted successfully!");
            translations.insert("report_unauthenticated", "User not authenticated");
            translations.insert("report_failed", "Failed to submit report");
            translations.insert("filtered_words", "Filtered words");

            // Ajustes
            translations.insert("loading_profile", "Loading profile...");
            translations.insert("transactions", "Transactions");
            translations.insert("exit_app", "Exit App");
            translations.insert("logout", "Logout");
            translations.insert("language", "Language");

            // Otros
            translations.insert("coming_soon", "Coming soon!");
            translations.insert("coming_soon_body", "This page is under construction.");
            translations.insert("not_found_code", "404");
            translations.insert("page_not_found", "Page not found");
            translations.insert("back_home", "Back to home");
        }
        _ => {
            // Splash / Home
            translations.insert("app_tagline", "ইসলামিক অ্যাপ্লিকেশন বাংলাদেশ নিউ ইউনিটি");
            translations.insert("app_motto", "সঠিক সময়ে নামাজ পড়ুন, আপনার বিশ্বাসকে শক্তিশালী করুন");
            translations.insert("home_title", "ইসলামিক অ্যাপ্লিকেশন");
            translations.insert("today_date", "আজকের তারিখ");
            translations.insert("prayer_schedule", "নামাজের সময়সূচী");
            translations.insert("current_prayer", "বর্তমান নামাজ");

            // Navegación
            translations.insert("nav_home", "হোম");
            translations.insert("nav_menu", "মেনু");
            translations.insert("nav_messages", "বার্তা");
            translations.insert("nav_settings", "সেটিংস");
            translations.insert("nav_login", "লগইন");
            translations.insert("menu_district", "জেলা");
            translations.insert("menu_thana", "থানা");
            translations.insert("menu_union", "ইউনিয়ন");
            translations.insert("menu_report", "প্রতিবেদন");
            translations.insert("menu_fund", "ফান্ড");

            // Directorio
            translations.insert("district_title", "জেলা কমিটি");
            translations.insert("district_subtitle", "সরাসরি যোগাযোগ করুন");
            translations.insert("thana_title", "থানা তালিকা");
            translations.insert("thana_subtitle", "আপনার থানা নির্বাচন করুন");
            translations.insert("union_title", "ইউনিয়ন তালিকা");
            translations.insert("union_subtitle", "আপনার ইউনিয়ন নির্বাচন করুন");
            translations.insert("members_title", "থানা সদস্যদের তালিকা");
            translations.insert("union_members_title", "ইউনিয়ন সদস্যদের তালিকা");
            translations.insert("checking_session", "সেশন যাচাই করা হচ্ছে...");
            translations.insert("loading_data", "তথ্য লোড হচ্ছে...");
            translations.insert("no_data_now", "বর্তমানে কোন তথ্য পাওয়া যায়নি");
            translations.insert("no_thana", "কোনো থানা পাওয়া যায়নি");
            translations.insert("no_union", "কোনো ইউনিয়ন পাওয়া যায়নি");
            translations.insert("no_members", "কোনো সদস্য পাওয়া যায়নি");
            translations.insert("thana_not_found", "থানা খুঁজে পাওয়া যায়নি");
            translations.insert("union_not_found", "ইউনিয়ন খুঁজে পাওয়া যায়নি");
            translations.insert("load_failed", "তথ্য লোড করতে সমস্যা হয়েছে। পরে আবার চেষ্টা করুন");
            translations.insert("retry", "আবার চেষ্টা করুন");
            translations.insert("blood_group", "রক্তের গ্রুপ");
            translations.insert("phone", "ফোন নম্বর");
            translations.insert("email", "ইমেইল");

            // Login
            translations.insert("login_title", "লগইন");
            translations.insert("user_id", "ব্যবহারকারী ID");
            translations.insert("password", "পাসওয়ার্ড");
            translations.insert("loading", "লোড হচ্ছে...");
            translations.insert("fill_all_fields", "সব ফিল্ড পূরণ করুন");
            translations.insert("id_not_found", "ID খুঁজে পাওয়া যায়নি");
            translations.insert("wrong_password", "পাসওয়ার্ড সঠিক নয়");
            translations.insert("login_failed", "লগইন করতে সমস্যা হয়েছে, পরে আবার চেষ্টা করুন");

            // Reporte
            translations.insert("report_branch", "শাখা");
            translations.insert("report_district", "জেলা");
            translations.insert("report_type", "ধরন");
            translations.insert("report_description", "প্রতিবেদনের বিবরণ");
            translations.insert("report_submit", "প্রতিবেদন জমা দিন");
            translations.insert("report_success", "প্রতিবেদন সফলভাবে জমা হয়েছে!");
            translations.insert("report_unauthenticated", "ব্যবহারকারী লগইন করেননি");
            translations.insert("report_failed", "প্রতিবেদন জমা দিতে সমস্যা হয়েছে");
            translations.insert("filtered_words", "ফিল্টার করা শব্দ");

            // Ajustes
            translations.insert("loading_profile", "প্রোফাইল লোড হচ্ছে...");
            translations.insert("transactions", "লেনদেন");
            translations.insert("exit_app", "অ্যাপ থেকে বের হন");
            translations.insert("logout", "লগআউট");
            translations.insert("language", "ভাষা");

            // Otros
            translations.insert("coming_soon", "আমরা শীঘ্রই আসছি!");
            translations.insert("coming_soon_body", "এই পৃষ্ঠাটি বর্তমানে নির্মাণাধীন রয়েছে। আমরা একটি অসাধারণ অভিজ্ঞতা নিয়ে আসতে কাজ করছি!");
            translations.insert("not_found_code", "৪০৪");
            translations.insert("page_not_found", "পৃষ্ঠাটি খুঁজে পাওয়া যায়নি");
            translations.insert("back_home", "হোম পেজে ফিরে যান");
        }
    }

    translations
}

/// Traducir una clave; si no existe se devuelve la propia clave
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bengali_is_the_default_table() {
        assert_eq!(t("wrong_password", DEFAULT_LANGUAGE), "পাসওয়ার্ড সঠিক নয়");
        assert_eq!(t("wrong_password", "xx"), "পাসওয়ার্ড সঠিক নয়");
        assert_eq!(t("wrong_password", "en"), "Incorrect password");
    }

    #[test]
    fn both_tables_have_the_same_keys() {
        let mut bn: Vec<_> = get_translations("BN").into_keys().collect();
        let mut en: Vec<_> = get_translations("EN").into_keys().collect();
        bn.sort_unstable();
        en.sort_unstable();
        assert_eq!(bn, en);
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        assert_eq!(t("does_not_exist", "BN"), "does_not_exist");
    }
}
