/// One tournament statistics page to scrape.
#[derive(Debug, Clone, Copy)]
pub struct SourceRecord {
    pub year: i32,
    pub title: &'static str,
    pub url: &'static str,
}

/// Every MPL/MSC/invitational statistics page tracked so far, 2018-2025.
pub const TOURNAMENTS: &[SourceRecord] = &[
    // 2018
    SourceRecord { year: 2018, title: "MPL Indonesia Season 1", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_1/Statistics" },
    SourceRecord { year: 2018, title: "MPL MYSG Season 1", url: "https://liquipedia.net/mobilelegends/MPL/MYSG/Season_1/Statistics" },
    SourceRecord { year: 2018, title: "MPL Philippines Season 1", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_1/Statistics" },
    SourceRecord { year: 2018, title: "MSC 2018", url: "https://liquipedia.net/mobilelegends/MSC/2018/Statistics" },
    SourceRecord { year: 2018, title: "MPL MYSG Season 2", url: "https://liquipedia.net/mobilelegends/MPL/MYSG/Season_2/Statistics" },
    SourceRecord { year: 2018, title: "MPL Indonesia Season 2", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_2/Statistics" },
    // 2019
    SourceRecord { year: 2019, title: "MPL Philippines Season 2", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_2/Statistics" },
    SourceRecord { year: 2019, title: "MPL MYSG Season 3", url: "https://liquipedia.net/mobilelegends/MPL/MYSG/Season_3/Statistics" },
    SourceRecord { year: 2019, title: "MPL Indonesia Season 3", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_3/Statistics" },
    SourceRecord { year: 2019, title: "MPL Philippines Season 3", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_3/Statistics" },
    SourceRecord { year: 2019, title: "MSC 2019", url: "https://liquipedia.net/mobilelegends/MSC/2019/Statistics" },
    SourceRecord { year: 2019, title: "MPL Philippines Season 4", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_4/Statistics" },
    SourceRecord { year: 2019, title: "MPL MYSG Season 4", url: "https://liquipedia.net/mobilelegends/MPL/MYSG/Season_4/Statistics" },
    SourceRecord { year: 2019, title: "MPL Myanmar Season 3", url: "https://liquipedia.net/mobilelegends/MPL/Myanmar/Season_3/Statistics" },
    SourceRecord { year: 2019, title: "MPL Indonesia Season 4", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_4/Statistics" },
    // 2020
    SourceRecord { year: 2020, title: "MPL Indonesia Season 5", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_5/Statistics" },
    SourceRecord { year: 2020, title: "MPL MYSG Season 5", url: "https://liquipedia.net/mobilelegends/MPL/MYSG/Season_5/Statistics" },
    SourceRecord { year: 2020, title: "MPL Philippines Season 5", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_5/Statistics" },
    SourceRecord { year: 2020, title: "MPL Myanmar Season 4", url: "https://liquipedia.net/mobilelegends/MPL/Myanmar/Season_4/Statistics" },
    SourceRecord { year: 2020, title: "MPLI 4 Nation Cup", url: "https://liquipedia.net/mobilelegends/MPLI_4_Nation_Cup/Statistics" },
    SourceRecord { year: 2020, title: "MPL Indonesia Season 6", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_6/Statistics" },
    SourceRecord { year: 2020, title: "MPL Philippines Season 6", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_6/Statistics" },
    SourceRecord { year: 2020, title: "MPL MYSG Season 6", url: "https://liquipedia.net/mobilelegends/MPL/MYSG/Season_6/Statistics" },
    SourceRecord { year: 2020, title: "MPL Myanmar Season 5", url: "https://liquipedia.net/mobilelegends/MPL/Myanmar/Season_5/Statistics" },
    SourceRecord { year: 2020, title: "ONE Esports MPL Invitational 2020", url: "https://liquipedia.net/mobilelegends/ONE_Esports_MPL_Invitational/2020/Statistics" },
    // 2021
    SourceRecord { year: 2021, title: "MPL Indonesia Season 7", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_7/Statistics" },
    SourceRecord { year: 2021, title: "MPL Singapore Season 1", url: "https://liquipedia.net/mobilelegends/MPL/Singapore/Season_1/Statistics" },
    SourceRecord { year: 2021, title: "MPL Philippines Season 7", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_7/Statistics" },
    SourceRecord { year: 2021, title: "MPL Malaysia Season 7", url: "https://liquipedia.net/mobilelegends/MPL/Malaysia/Season_7/Statistics" },
    SourceRecord { year: 2021, title: "MSC 2021", url: "https://liquipedia.net/mobilelegends/MSC/2021/Statistics" },
    SourceRecord { year: 2021, title: "MPL Singapore Season 2", url: "https://liquipedia.net/mobilelegends/MPL/Singapore/Season_2/Statistics" },
    SourceRecord { year: 2021, title: "MPL Malaysia Season 8", url: "https://liquipedia.net/mobilelegends/MPL/Malaysia/Season_8/Statistics" },
    SourceRecord { year: 2021, title: "MPL Philippines Season 8", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_8/Statistics" },
    SourceRecord { year: 2021, title: "MPL Indonesia Season 8", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_8/Statistics" },
    SourceRecord { year: 2021, title: "ONE Esports MPL Invitational 2021", url: "https://liquipedia.net/mobilelegends/ONE_Esports_MPL_Invitational/2021/Statistics" },
    // 2022
    SourceRecord { year: 2022, title: "MPL Indonesia Season 9", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_9/Statistics" },
    SourceRecord { year: 2022, title: "MPL Malaysia Season 9", url: "https://liquipedia.net/mobilelegends/MPL/Malaysia/Season_9/Statistics" },
    SourceRecord { year: 2022, title: "MPL Philippines Season 9", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_9/Statistics" },
    SourceRecord { year: 2022, title: "MPL Singapore Season 3", url: "https://liquipedia.net/mobilelegends/MPL/Singapore/Season_3/Statistics" },
    SourceRecord { year: 2022, title: "MPL MENA Spring 2022", url: "https://liquipedia.net/mobilelegends/MPL/MENA/2022/Spring/Statistics" },
    SourceRecord { year: 2022, title: "MSC 2022", url: "https://liquipedia.net/mobilelegends/MSC/2022/Statistics" },
    SourceRecord { year: 2022, title: "Liga Latam Season 2", url: "https://liquipedia.net/mobilelegends/Liga_Latam/Season_2/Statistics" },
    SourceRecord { year: 2022, title: "MPL Singapore Season 4", url: "https://liquipedia.net/mobilelegends/MPL/Singapore/Season_4/Statistics" },
    SourceRecord { year: 2022, title: "MPL MENA Fall 2022", url: "https://liquipedia.net/mobilelegends/MPL/MENA/2022/Fall/Statistics" },
    SourceRecord { year: 2022, title: "MPL Malaysia Season 10", url: "https://liquipedia.net/mobilelegends/MPL/Malaysia/Season_10/Statistics" },
    SourceRecord { year: 2022, title: "MPL Philippines Season 10", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_10/Statistics" },
    SourceRecord { year: 2022, title: "MPL Indonesia Season 10", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_10/Statistics" },
    SourceRecord { year: 2022, title: "ONE Esports MPL Invitational 2022", url: "https://liquipedia.net/mobilelegends/ONE_Esports_MPL_Invitational/2022/Statistics" },
    // 2023
    SourceRecord { year: 2023, title: "MPL Indonesia Season 11", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_11/Statistics" },
    SourceRecord { year: 2023, title: "MPL Singapore Season 5", url: "https://liquipedia.net/mobilelegends/MPL/Singapore/Season_5/Statistics" },
    SourceRecord { year: 2023, title: "MPL Malaysia Season 11", url: "https://liquipedia.net/mobilelegends/MPL/Malaysia/Season_11/Statistics" },
    SourceRecord { year: 2023, title: "MPL Philippines Season 11", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_11/Statistics" },
    SourceRecord { year: 2023, title: "MPL MENA Spring 2023", url: "https://liquipedia.net/mobilelegends/MPL/MENA/2023/Spring/Statistics" },
    SourceRecord { year: 2023, title: "ESL Snapdragon Pro Series SEA 3", url: "https://liquipedia.net/mobilelegends/ESL/Snapdragon_Pro_Series/Season_3/SEA/Challenge_Finals/Statistics" },
    SourceRecord { year: 2023, title: "Liga Latam 2023", url: "https://liquipedia.net/mobilelegends/Liga_Latam/2023/Statistics" },
    SourceRecord { year: 2023, title: "NACT Fall 2023", url: "https://liquipedia.net/mobilelegends/NACT/2023/Fall/Statistics" },
    SourceRecord { year: 2023, title: "MLBB Continental Championship Season 2", url: "https://liquipedia.net/mobilelegends/MLBB_Continental_Championships/Season_2/Statistics" },
    SourceRecord { year: 2023, title: "MPL Cambodia Autumn 2023", url: "https://liquipedia.net/mobilelegends/MPL/Cambodia/2023/Autumn/Statistics" },
    SourceRecord { year: 2023, title: "MPL Malaysia Season 12", url: "https://liquipedia.net/mobilelegends/MPL/Malaysia/Season_12/Statistics" },
    SourceRecord { year: 2023, title: "MTC Turkiye Season 2", url: "https://liquipedia.net/mobilelegends/MTC_Turkiye_Championship/Season_2/Statistics" },
    SourceRecord { year: 2023, title: "MPL Indonesia Season 12", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_12/Statistics" },
    SourceRecord { year: 2023, title: "MPL MENA Fall 2023", url: "https://liquipedia.net/mobilelegends/MPL/MENA/2023/Fall/Statistics" },
    SourceRecord { year: 2023, title: "MPL Singapore Season 6", url: "https://liquipedia.net/mobilelegends/MPL/Singapore/Season_6/Statistics" },
    SourceRecord { year: 2023, title: "MPL Philippines Season 12", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_12/Statistics" },
    SourceRecord { year: 2023, title: "ONE Esports MPL Invitational 2023", url: "https://liquipedia.net/mobilelegends/ONE_Esports_MPL_Invitational/2023/Statistics" },
    // 2024
    SourceRecord { year: 2024, title: "Games of the Future 2024", url: "https://liquipedia.net/mobilelegends/Games_of_the_Future/2024/Statistics" },
    SourceRecord { year: 2024, title: "MPL LATAM Season 1", url: "https://liquipedia.net/mobilelegends/MPL/LATAM/Season_1/Statistics" },
    SourceRecord { year: 2024, title: "NACT Spring 2024", url: "https://liquipedia.net/mobilelegends/NACT/2024/Spring/Statistics" },
    SourceRecord { year: 2024, title: "MTC Turkiye Season 3", url: "https://liquipedia.net/mobilelegends/MTC_Turkiye_Championship/Season_3/Statistics" },
    SourceRecord { year: 2024, title: "MPL Cambodia Season 6", url: "https://liquipedia.net/mobilelegends/MPL/Cambodia/Season_6/Statistics" },
    SourceRecord { year: 2024, title: "MPL Philippines Season 13", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_13/Statistics" },
    SourceRecord { year: 2024, title: "MLBB Continental Championship Season 3", url: "https://liquipedia.net/mobilelegends/MLBB_Continental_Championships/Season_3/Statistics" },
    SourceRecord { year: 2024, title: "MPL Malaysia Season 13", url: "https://liquipedia.net/mobilelegends/MPL/Malaysia/Season_13/Statistics" },
    SourceRecord { year: 2024, title: "MPL Indonesia Season 13", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_13/Statistics" },
    SourceRecord { year: 2024, title: "MPL MENA Season 5", url: "https://liquipedia.net/mobilelegends/MPL/MENA/Season_5/Statistics" },
    SourceRecord { year: 2024, title: "MPL Singapore Season 7", url: "https://liquipedia.net/mobilelegends/MPL/Singapore/Season_7/Statistics" },
    SourceRecord { year: 2024, title: "Snapdragon Pro Series APAC 5", url: "https://liquipedia.net/mobilelegends/ESL/Snapdragon_Pro_Series/Season_5/APAC/Challenge_Finals/Statistics" },
    SourceRecord { year: 2024, title: "MPL Singapore Season 8", url: "https://liquipedia.net/mobilelegends/MPL/Singapore/Season_8/Statistics" },
    SourceRecord { year: 2024, title: "MPL LATAM Season 2", url: "https://liquipedia.net/mobilelegends/MPL/LATAM/Season_2/Statistics" },
    SourceRecord { year: 2024, title: "MPL MENA Season 6", url: "https://liquipedia.net/mobilelegends/MPL/MENA/Season_6/Statistics" },
    SourceRecord { year: 2024, title: "MTC Turkiye Season 4", url: "https://liquipedia.net/mobilelegends/MTC_Turkiye_Championship/Season_4/Statistics" },
    SourceRecord { year: 2024, title: "MPL Philippines Season 14", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_14/Statistics" },
    SourceRecord { year: 2024, title: "MPL Cambodia Season 7", url: "https://liquipedia.net/mobilelegends/MPL/Cambodia/Season_7/Statistics" },
    SourceRecord { year: 2024, title: "NACT Fall 2024", url: "https://liquipedia.net/mobilelegends/NACT/2024/Fall/Statistics" },
    SourceRecord { year: 2024, title: "MLBB Continental Championship Season 4", url: "https://liquipedia.net/mobilelegends/MLBB_Continental_Championships/Season_4/Statistics" },
    SourceRecord { year: 2024, title: "MPL Indonesia Season 14", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_14/Statistics" },
    SourceRecord { year: 2024, title: "MPL Malaysia Season 14", url: "https://liquipedia.net/mobilelegends/MPL/Malaysia/Season_14/Statistics" },
    // 2025
    SourceRecord { year: 2025, title: "Snapdragon Pro Series APAC 6", url: "https://liquipedia.net/mobilelegends/ESL/Snapdragon_Pro_Series/Season_6/APAC/Challenge_Finals/Statistics" },
    SourceRecord { year: 2025, title: "Snapdragon Pro Series Masters 2025", url: "https://liquipedia.net/mobilelegends/ESL/Snapdragon_Pro_Series/2025/Masters/Statistics" },
    SourceRecord { year: 2025, title: "MLBB Super Cup Invitational 2025", url: "https://liquipedia.net/mobilelegends/MLBB_Super_Cup_Invitational/2025/Statistics" },
    SourceRecord { year: 2025, title: "MPL Cambodia Season 8", url: "https://liquipedia.net/mobilelegends/MPL/Cambodia/Season_8/Statistics" },
    SourceRecord { year: 2025, title: "MTC Turkiye Championship Season 5", url: "https://liquipedia.net/mobilelegends/MTC_Turkiye_Championship/Season_5/Statistics" },
    SourceRecord { year: 2025, title: "MPL MENA Season 7", url: "https://liquipedia.net/mobilelegends/MPL/MENA/Season_7/Statistics" },
    SourceRecord { year: 2025, title: "MLBB Continental Championships Season 5", url: "https://liquipedia.net/mobilelegends/MLBB_Continental_Championships/Season_5/Statistics" },
    SourceRecord { year: 2025, title: "MPL Philippines Season 15", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_15/Statistics" },
    SourceRecord { year: 2025, title: "MPL Singapore Season 9", url: "https://liquipedia.net/mobilelegends/MPL/Singapore/Season_9/Statistics" },
    SourceRecord { year: 2025, title: "MPL LATAM Season 3", url: "https://liquipedia.net/mobilelegends/MPL/LATAM/Season_3/Statistics" },
    SourceRecord { year: 2025, title: "MPL Indonesia Season 15", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_15/Statistics" },
    SourceRecord { year: 2025, title: "MPL Malaysia Season 15", url: "https://liquipedia.net/mobilelegends/MPL/Malaysia/Season_15/Statistics" },
    SourceRecord { year: 2025, title: "MPL MENA Season 8", url: "https://liquipedia.net/mobilelegends/MPL/MENA/Season_8/Statistics" },
    SourceRecord { year: 2025, title: "MTC Turkiye Championship Season 6", url: "https://liquipedia.net/mobilelegends/MTC_Turkiye_Championship/Season_6/Statistics" },
    SourceRecord { year: 2025, title: "MPL Philippines Season 16", url: "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_16/Statistics" },
    SourceRecord { year: 2025, title: "MPL Singapore Season 10", url: "https://liquipedia.net/mobilelegends/MPL/Singapore/Season_10/Statistics" },
    SourceRecord { year: 2025, title: "MPL Indonesia Season 16", url: "https://liquipedia.net/mobilelegends/MPL/Indonesia/Season_16/Statistics" },
    SourceRecord { year: 2025, title: "MPL LATAM Season 4", url: "https://liquipedia.net/mobilelegends/MPL/LATAM/Season_4/Statistics" },
    SourceRecord { year: 2025, title: "MLBB Continental Championships Season 6", url: "https://liquipedia.net/mobilelegends/MLBB_Continental_Championships/Season_6/Statistics" },
    SourceRecord { year: 2025, title: "MLBB Super League Season 2", url: "https://liquipedia.net/mobilelegends/MLBB_Super_League/Season_2/Statistics" },
    SourceRecord { year: 2025, title: "MLBB China Masters 2025", url: "https://liquipedia.net/mobilelegends/MLBB_China_Masters/2025/Statistics" },
    SourceRecord { year: 2025, title: "MPL Malaysia Season 16", url: "https://liquipedia.net/mobilelegends/MPL/Malaysia/Season_16/Statistics" },
    SourceRecord { year: 2025, title: "MPL Cambodia Season 9", url: "https://liquipedia.net/mobilelegends/MPL/Cambodia/Season_9/Statistics" },
    SourceRecord { year: 2025, title: "Games of the Future 2025", url: "https://liquipedia.net/mobilelegends/Games_of_the_Future/2025/Statistics" },
];
