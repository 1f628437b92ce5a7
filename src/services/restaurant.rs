// src/services/restaurant.rs
//! Fixed business facts the assistant answers from.

#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct RestaurantContext {
    pub name: &'static str,
    pub description: &'static str,
    pub hours: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub transport: &'static str,
    pub parking: &'static str,
    pub website: &'static str,
    pub payment: &'static str,
    pub service: &'static str,
    pub menu: &'static [MenuItem],
}

pub const RESTAURANT: RestaurantContext = RestaurantContext {
    name: "高檔餐廳",
    description: "本餐廳主打頂級牛排與新鮮海鮮，提供舒適優雅的用餐環境，適合家庭聚餐、商務宴請及浪漫約會。",
    hours: "週一至週日 11:00 - 22:00",
    address: "台北市信義區XX路XX號",
    phone: "02-1234-5678",
    transport: "捷運信義安和站步行5分鐘，公車信義路口站下車即達。",
    parking: "本餐廳備有地下停車場，亦可於鄰近停車場停車。",
    website: "https://luxury-restaurant.example.com",
    payment: "現金、信用卡、行動支付皆可。",
    service: "免費Wi-Fi、包廂、兒童座椅、素食選項、生日蛋糕預訂。",
    menu: &[
        MenuItem { name: "招牌牛排", price: "$1200" },
        MenuItem { name: "海鮮義大利麵", price: "$800" },
        MenuItem { name: "經典沙拉", price: "$300" },
        MenuItem { name: "松露薯條", price: "$220" },
        MenuItem { name: "手工甜點", price: "$180" },
        MenuItem { name: "主廚濃湯", price: "$150" },
        MenuItem { name: "香煎鴨胸", price: "$950" },
        MenuItem { name: "炙燒干貝", price: "$680" },
        MenuItem { name: "義式烤雞腿", price: "$520" },
        MenuItem { name: "蒜香奶油蝦", price: "$480" },
        MenuItem { name: "田園蔬菜烘蛋", price: "$350" },
        MenuItem { name: "法式洋蔥湯", price: "$180" },
        MenuItem { name: "經典提拉米蘇", price: "$160" },
        MenuItem { name: "現打果汁", price: "$120" },
        MenuItem { name: "精品咖啡", price: "$100" },
    ],
};

impl RestaurantContext {
    /// One `- name (price)` line per dish.
    pub fn menu_text(&self) -> String {
        self.menu
            .iter()
            .map(|item| format!("- {} ({})", item.name, item.price))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the grounding prompt sent ahead of every user message.
    pub fn render_prompt(&self) -> String {
        format!(
            "\n你是一位專業且友善的高檔餐廳客服助理。你的任務是根據你收到的資訊和以下的餐廳情境資料來回答使用者關於訂位、菜單或餐廳的問題。\n\
             \n\
             請嚴格遵守以下規則：\n\
             1. 僅使用你提供的情境資訊來回答問題。\n\
             2. 保持專業、禮貌和熱情。\n\
             3. 如果資訊中沒有答案，請禮貌地告知使用者這超出了你的服務範圍。\n\
             \n\
             [餐廳資訊]\n\
             餐廳名稱: {name}\n\
             簡介: {description}\n\
             地址: {address}\n\
             電話: {phone}\n\
             營業時間: {hours}\n\
             交通方式: {transport}\n\
             停車資訊: {parking}\n\
             付款方式: {payment}\n\
             服務設施: {service}\n\
             官方網站: {website}\n\
             \n\
             [菜單]\n\
             {menu}\n",
            name = self.name,
            description = self.description,
            address = self.address,
            phone = self.phone,
            hours = self.hours,
            transport = self.transport,
            parking = self.parking,
            payment = self.payment,
            service = self.service,
            website = self.website,
            menu = self.menu_text(),
        )
    }
}
