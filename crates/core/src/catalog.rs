//! Built-in story catalog.

use crate::model::{Story, StoryId, Verdict};

struct StoryRecord {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    explanation: &'static str,
    verdict: Verdict,
    image: &'static str,
}

/// Read-only, ordered collection of stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    stories: Vec<Story>,
}

impl Catalog {
    /// The ten stories shipped with the app, in their canonical order.
    #[must_use]
    pub fn builtin() -> Self {
        let stories = BUILTIN
            .iter()
            .map(|record| {
                Story::new(
                    StoryId::new(record.id),
                    record.title,
                    record.content,
                    record.explanation,
                    record.verdict,
                    record.image,
                )
            })
            .collect();
        Self { stories }
    }

    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    #[must_use]
    pub fn get(&self, id: &StoryId) -> Option<&Story> {
        self.stories.iter().find(|story| story.id() == id)
    }

}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN: &[StoryRecord] = &[
    StoryRecord {
        id: "1",
        title: "The Depths of the Sea King",
        content: r#"At Cape Sounion, Greece, ancient sailors would offer sacrifices to Poseidon before embarking on dangerous voyages across the Aegean Sea. The temple ruins that stand there today were built in 444 BC, but the site's connection to the sea god dates back much further.

According to legend, Poseidon himself would rise from the depths during storms, his golden trident gleaming as he calmed the waters for those who honored him. The ancient Greeks believed that the god of the sea controlled not just the waves, but the very fate of those who dared to cross his domain.

In the depths below the temple, shimmering lights can sometimes be seen dancing in the water at night. Local fishermen claim these are the remnants of Atlantis, the lost city that Poseidon once ruled before it sank beneath the waves in a single day and night of misfortune."#,
        explanation: r#"This is a MYTH. While Cape Sounion and its temple to Poseidon are real historical sites, the stories about Poseidon rising from the depths, controlling storms, and the connection to Atlantis are mythological. The shimmering lights are likely bioluminescent organisms, not remnants of Atlantis."#,
        verdict: Verdict::Myth,
        image: "img/sp/1.png",
    },
    StoryRecord {
        id: "2",
        title: "The Oracle of Delphi",
        content: r#"The Oracle of Delphi was one of the most important religious sites in ancient Greece. Located at the foot of Mount Parnassus, the oracle was consulted by kings, generals, and common people seeking guidance on important decisions.

The Pythia, the priestess who served as the oracle, would sit on a tripod over a chasm in the earth. Vapors rising from the chasm would induce a trance-like state, during which she would deliver cryptic prophecies. These prophecies were then interpreted by the priests of Apollo.

The oracle's influence was so great that it shaped the course of Greek history. Cities would send ambassadors to consult the oracle before going to war, and individuals would travel great distances to seek advice on personal matters. The oracle operated for over 1000 years, from the 8th century BC until the 4th century AD."#,
        explanation: r#"This is TRUTH. The Oracle of Delphi was indeed a real and highly influential institution in ancient Greece. Archaeological evidence confirms the site, the role of the Pythia, and the oracle's operation for over a millennium. The geological chasm and vapors are also documented."#,
        verdict: Verdict::Truth,
        image: "img/sp/2.png",
    },
    StoryRecord {
        id: "3",
        title: "The Curse of the Pharaohs",
        content: r#"When Howard Carter opened the tomb of Tutankhamun in 1922, he discovered not just the treasures of the young pharaoh, but also a warning: "Death shall come on swift wings to him who disturbs the peace of the King."

Within months of the tomb's opening, several members of the excavation team died under mysterious circumstances. Lord Carnarvon, who funded the expedition, died from an infected mosquito bite. His dog, Susie, died at the same moment back in England. A canary that Carter had given to Carnarvon was eaten by a cobra on the day of the tomb's opening.

The curse seemed to target those who had been present at the tomb's opening. Over the next decade, more than a dozen people connected to the discovery died, leading many to believe in the supernatural power of the ancient curse."#,
        explanation: r#"This is a MYTH. While the deaths did occur, they can be explained by natural causes, coincidence, and the fact that many people were involved in the expedition. The "curse" was largely a media creation that capitalized on the mysterious deaths. Most of the excavation team lived long, normal lives."#,
        verdict: Verdict::Myth,
        image: "img/sp/3.png",
    },
    StoryRecord {
        id: "4",
        title: "The Library of Alexandria",
        content: r#"The Library of Alexandria was one of the largest and most significant libraries of the ancient world. Founded in the 3rd century BC by Ptolemy I, it housed hundreds of thousands of scrolls containing the knowledge of the ancient world.

The library was more than just a repository of books; it was a center of learning and scholarship. Scholars from across the Mediterranean world came to study, copy, and translate texts. The library's collection included works on mathematics, astronomy, medicine, philosophy, and literature.

The library's destruction is often attributed to Julius Caesar, who accidentally set fire to it during his siege of Alexandria in 48 BC. However, the library continued to exist in some form for several more centuries, gradually declining due to various factors including religious conflicts and lack of funding."#,
        explanation: r#"This is TRUTH. The Library of Alexandria was indeed a real and magnificent institution. While the exact details of its destruction are debated among historians, the library was a genuine center of learning that housed vast amounts of ancient knowledge and attracted scholars from across the ancient world."#,
        verdict: Verdict::Truth,
        image: "img/sp/4.png",
    },
    StoryRecord {
        id: "5",
        title: "The Fountain of Youth",
        content: r#"In 1513, Spanish explorer Juan Ponce de León set sail from Puerto Rico in search of the legendary Fountain of Youth. According to the stories he had heard from the indigenous people, this magical spring could restore youth to anyone who drank from it.

Ponce de León's expedition landed on the coast of what is now Florida, becoming the first European to set foot on the mainland of what would become the United States. He named the land "La Florida" because of the lush vegetation he found there.

Despite his extensive search, Ponce de León never found the Fountain of Youth. However, his expedition did lead to the European discovery of Florida and the establishment of Spanish claims to the territory. The legend of the Fountain of Youth continues to capture the imagination of people around the world."#,
        explanation: r#"This is TRUTH. Ponce de León's search for the Fountain of Youth is a well-documented historical event. While the fountain itself is mythical, his expedition was real and resulted in the European discovery of Florida. The story is supported by historical records and accounts from the time."#,
        verdict: Verdict::Truth,
        image: "img/sp/5.png",
    },
    StoryRecord {
        id: "6",
        title: "The Lost City of El Dorado",
        content: r#"The legend of El Dorado, the "Golden One," began with the Muisca people of Colombia. Their new king would be covered in gold dust and dive into Lake Guatavita as part of a coronation ceremony. Spanish conquistadors heard this story and began searching for a city made entirely of gold.

Francisco Pizarro's brother, Gonzalo, led an expedition into the Amazon rainforest in search of El Dorado. The expedition was a disaster, with most of the men dying from disease, starvation, and attacks by indigenous people. Only a handful of survivors made it back to civilization.

Despite numerous expeditions over the centuries, no city of gold has ever been found. The legend of El Dorado has inspired countless treasure hunters and adventurers, but the city remains as elusive as ever."#,
        explanation: r#"This is TRUTH. The legend of El Dorado is based on real historical events and people. The Muisca coronation ceremony was real, and the Spanish expeditions to find the golden city are well-documented. While the city itself is mythical, the historical context and expeditions are factual."#,
        verdict: Verdict::Truth,
        image: "img/sp/6.png",
    },
    StoryRecord {
        id: "7",
        title: "The Bermuda Triangle",
        content: r#"The Bermuda Triangle, also known as the Devil's Triangle, is a region in the western part of the North Atlantic Ocean where ships and aircraft are said to disappear under mysterious circumstances. The area is roughly bounded by Miami, Bermuda, and Puerto Rico.

The legend of the Bermuda Triangle began in the 1950s with the disappearance of Flight 19, a group of five U.S. Navy bombers that vanished during a training mission. Since then, numerous ships and aircraft have been reported missing in the area, leading to theories about supernatural causes.

However, statistical analysis shows that the Bermuda Triangle has no more disappearances than any other similarly sized area of ocean. The U.S. Coast Guard and other official agencies have stated that there is no evidence of unusual phenomena in the area."#,
        explanation: r#"This is a MYTH. While the disappearances in the Bermuda Triangle are real, the area is not statistically more dangerous than other parts of the ocean. The legend was largely created by writers and media, and most disappearances can be explained by natural causes like weather, human error, and mechanical failure."#,
        verdict: Verdict::Myth,
        image: "img/sp/7.png",
    },
    StoryRecord {
        id: "8",
        title: "The Rosetta Stone",
        content: r#"The Rosetta Stone is a granodiorite stele inscribed with a decree issued in Memphis, Egypt, in 196 BC. The decree appears in three scripts: Ancient Egyptian hieroglyphs, Demotic script, and Ancient Greek.

Discovered in 1799 by French soldiers during Napoleon's campaign in Egypt, the stone became the key to deciphering Egyptian hieroglyphs. The French scholar Jean-François Champollion used the Greek text to understand the hieroglyphic script, which had been a mystery for over a thousand years.

The Rosetta Stone is now housed in the British Museum in London, where it has been on display since 1802. It remains one of the most important archaeological discoveries in history, as it unlocked the secrets of ancient Egyptian civilization."#,
        explanation: r#"This is TRUTH. The Rosetta Stone is a real archaeological artifact that was indeed discovered in 1799 and used to decipher Egyptian hieroglyphs. Champollion's work with the stone is well-documented, and the stone is currently displayed in the British Museum. This is one of the most significant discoveries in archaeology."#,
        verdict: Verdict::Truth,
        image: "img/sp/8.png",
    },
    StoryRecord {
        id: "9",
        title: "The Loch Ness Monster",
        content: r#"The Loch Ness Monster, affectionately known as "Nessie," is said to inhabit Loch Ness, a large, deep freshwater lake in the Scottish Highlands. The first modern sighting was reported in 1933, when a couple claimed to see a large creature crossing the road near the loch.

Since then, thousands of people have reported seeing something unusual in the waters of Loch Ness. The most famous photograph, known as the "Surgeon's Photograph," was taken in 1934 and appeared to show a long-necked creature emerging from the water.

Despite numerous scientific investigations, including sonar scans and underwater cameras, no conclusive evidence of a large creature has been found in Loch Ness. The lake has been thoroughly searched, and most scientists believe that the sightings can be explained by natural phenomena or hoaxes."#,
        explanation: r#"This is a MYTH. While the sightings and reports are real, there is no scientific evidence for the existence of a large creature in Loch Ness. The famous "Surgeon's Photograph" was later revealed to be a hoax. Most sightings can be explained by natural phenomena, floating logs, or optical illusions."#,
        verdict: Verdict::Myth,
        image: "img/sp/9.png",
    },
    StoryRecord {
        id: "10",
        title: "The Great Wall of China",
        content: r#"The Great Wall of China is a series of fortifications made of stone, brick, tamped earth, wood, and other materials, generally built along an east-to-west line across the historical northern borders of China. Construction began as early as the 7th century BC and continued for over 2,000 years.

The wall was built to protect Chinese states and empires against raids and invasions from various nomadic groups. The most famous sections were built during the Ming Dynasty (1368-1644), when the wall was reinforced with stone and brick.

Contrary to popular belief, the Great Wall is not visible from space with the naked eye. However, it is an impressive engineering feat, stretching over 13,000 miles in total length. The wall is now a UNESCO World Heritage Site and one of the most visited tourist attractions in China."#,
        explanation: r#"This is TRUTH. The Great Wall of China is a real historical structure that was built over centuries to protect China from invasions. While the myth about it being visible from space is false, the wall itself is genuine and represents one of the greatest engineering achievements in human history."#,
        verdict: Verdict::Truth,
        image: "img/sp/0.png",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_TOTAL_STORIES;

    #[test]
    fn builtin_size_matches_default_total() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.stories().len(), DEFAULT_TOTAL_STORIES as usize);
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<&str> = catalog.stories().iter().map(|s| s.id().as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.stories().len());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        let story = catalog.get(&StoryId::new("2")).unwrap();
        assert_eq!(story.title(), "The Oracle of Delphi");
        assert_eq!(story.verdict(), Verdict::Truth);
        assert!(catalog.get(&StoryId::new("404")).is_none());
    }

    #[test]
    fn explanations_agree_with_verdicts() {
        for story in Catalog::builtin().stories() {
            let prefix = match story.verdict() {
                Verdict::Truth => "This is TRUTH.",
                Verdict::Myth => "This is a MYTH.",
            };
            assert!(
                story.explanation().starts_with(prefix),
                "story {} explanation disagrees with verdict",
                story.id()
            );
        }
    }
}
